//! Chunk classification rules.
//!
//! A build output file belongs to exactly one chunk class. Classification is
//! an ordered rule list evaluated top-to-bottom over the lowercased file
//! name; the first matching rule wins, so a file can never land in two
//! categories. Unmatched `.js` files fall through to the `Component`
//! catch-all for code-split lazy chunks; files with any other extension are
//! left unclassified (they still count toward total build size).

/// The chunk class a build output file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkCategory {
    /// Vendor libraries chunk (`*vendor*.js`)
    Vendor,
    /// Main application entry chunk (`index-*.js`)
    Main,
    /// Icon library chunk (`*icons*.js`)
    Icons,
    /// Stylesheet bundle (`*.css`)
    Css,
    /// Any other `.js` chunk (lazy-loaded component code)
    Component,
}

impl ChunkCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ChunkCategory::Vendor => "vendor",
            ChunkCategory::Main => "main",
            ChunkCategory::Icons => "icons",
            ChunkCategory::Css => "css",
            ChunkCategory::Component => "component",
        }
    }
}

/// One classification rule: a named predicate over the lowercased file name.
pub struct ClassifyRule {
    pub name: &'static str,
    pub category: ChunkCategory,
    pub matches: fn(&str) -> bool,
}

fn is_vendor(name: &str) -> bool {
    name.ends_with(".js") && name.contains("vendor")
}

fn is_main(name: &str) -> bool {
    name.ends_with(".js") && name.starts_with("index-")
}

fn is_icons(name: &str) -> bool {
    name.ends_with(".js") && name.contains("icons")
}

fn is_css(name: &str) -> bool {
    name.ends_with(".css")
}

fn is_component(name: &str) -> bool {
    name.ends_with(".js")
}

/// Classification rules in evaluation order. First match wins.
pub const CLASSIFY_RULES: &[ClassifyRule] = &[
    ClassifyRule { name: "*vendor*.js", category: ChunkCategory::Vendor, matches: is_vendor },
    ClassifyRule { name: "index-*.js", category: ChunkCategory::Main, matches: is_main },
    ClassifyRule { name: "*icons*.js", category: ChunkCategory::Icons, matches: is_icons },
    ClassifyRule { name: "*.css", category: ChunkCategory::Css, matches: is_css },
    ClassifyRule { name: "*.js", category: ChunkCategory::Component, matches: is_component },
];

/// Classify a file name into its chunk category, or `None` for files with an
/// unrecognized extension.
pub fn classify(file_name: &str) -> Option<ChunkCategory> {
    let name = file_name.to_ascii_lowercase();
    CLASSIFY_RULES.iter().find(|rule| (rule.matches)(&name)).map(|rule| rule.category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_vendor() {
        assert_eq!(classify("vendor-Bx1a2b3c.js"), Some(ChunkCategory::Vendor));
        assert_eq!(classify("react-vendor.js"), Some(ChunkCategory::Vendor));
    }

    #[test]
    fn test_classify_main() {
        assert_eq!(classify("index-D4e5f6a7.js"), Some(ChunkCategory::Main));
    }

    #[test]
    fn test_classify_icons() {
        assert_eq!(classify("icons-C8b9c0d1.js"), Some(ChunkCategory::Icons));
    }

    #[test]
    fn test_classify_css() {
        assert_eq!(classify("index-A1b2c3d4.css"), Some(ChunkCategory::Css));
    }

    #[test]
    fn test_classify_component_catch_all() {
        assert_eq!(classify("ReportForm-E2f3a4b5.js"), Some(ChunkCategory::Component));
        assert_eq!(classify("Dashboard-F6a7b8c9.js"), Some(ChunkCategory::Component));
    }

    #[test]
    fn test_classify_unrecognized_extension() {
        assert_eq!(classify("index.html"), None);
        assert_eq!(classify("vendor-Bx1a2b3c.js.map"), None);
        assert_eq!(classify("logo.svg"), None);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify("Vendor-Bx1a2b3c.JS"), Some(ChunkCategory::Vendor));
    }

    #[test]
    fn test_first_match_wins() {
        // "index-vendor.js" matches both the vendor and main rules; the
        // vendor rule is evaluated first.
        assert_eq!(classify("index-vendor.js"), Some(ChunkCategory::Vendor));
        // A file containing "icons" but also "vendor" classifies as vendor.
        assert_eq!(classify("vendor-icons.js"), Some(ChunkCategory::Vendor));
    }

    #[test]
    fn test_rules_are_mutually_exclusive_per_file() {
        for name in ["vendor-a.js", "index-a.js", "icons-a.js", "a.css", "Widget-a.js"] {
            let lowered = name.to_ascii_lowercase();
            let first = CLASSIFY_RULES.iter().position(|r| (r.matches)(&lowered));
            assert!(first.is_some(), "no rule matched '{}'", name);
            // Exactly one category is assigned: the first matching rule's.
            assert_eq!(classify(name), Some(CLASSIFY_RULES[first.unwrap()].category));
        }
    }
}

//! Derived configuration for external performance tooling.
//!
//! The budget registry is the single source of truth; these generators
//! project it into the shapes expected by bundlesize, Lighthouse CI, and the
//! webpack bundle analyzer so the thresholds never drift apart.

use serde_json::{Value, json};

use crate::budgets::PerformanceBudgets;

fn max_size_kb(bytes: u64) -> String {
    format!("{} kB", bytes / 1024)
}

/// Bundlesize entries: per-pattern gzipped size ceilings.
pub fn bundlesize_config(budgets: &PerformanceBudgets) -> Value {
    let sizes = &budgets.bundle_sizes;
    json!([
        {
            "path": "./dist/assets/*vendor*.js",
            "maxSize": max_size_kb(sizes.vendor_chunk),
            "compression": "gzip",
        },
        {
            "path": "./dist/assets/index-*.js",
            "maxSize": max_size_kb(sizes.main_app),
            "compression": "gzip",
        },
        {
            "path": "./dist/assets/*.css",
            "maxSize": max_size_kb(sizes.css_bundle),
            "compression": "gzip",
        },
    ])
}

/// Lighthouse CI configuration: collect settings plus an assertion per
/// registry score, vital, and resource limit. Interactive and the resource
/// limits assert at `warn` severity; everything else is an `error`.
pub fn lighthouse_ci_config(budgets: &PerformanceBudgets) -> Value {
    let scores = &budgets.lighthouse_scores;
    let vitals = &budgets.core_web_vitals;
    let resources = &budgets.resource_limits;

    json!({
        "ci": {
            "collect": {
                "url": ["http://localhost:4173"],
                "startServerCommand": "npm run preview",
                "startServerReadyPattern": "Local:",
                "startServerReadyTimeout": 30000,
                "numberOfRuns": 3,
                "settings": {
                    "chromeFlags": "--no-sandbox --disable-dev-shm-usage",
                },
            },
            "assert": {
                "assertions": {
                    "categories:performance": ["error", { "minScore": scores.performance }],
                    "categories:accessibility": ["error", { "minScore": scores.accessibility }],
                    "categories:best-practices": ["error", { "minScore": scores.best_practices }],
                    "categories:seo": ["error", { "minScore": scores.seo }],
                    "first-contentful-paint":
                        ["error", { "maxNumericValue": vitals.first_contentful_paint }],
                    "largest-contentful-paint":
                        ["error", { "maxNumericValue": vitals.largest_contentful_paint }],
                    "cumulative-layout-shift":
                        ["error", { "maxNumericValue": vitals.cumulative_layout_shift }],
                    "total-blocking-time":
                        ["error", { "maxNumericValue": vitals.total_blocking_time }],
                    "speed-index": ["error", { "maxNumericValue": vitals.speed_index }],
                    "interactive": ["warn", { "maxNumericValue": vitals.time_to_interactive }],
                    "unused-javascript":
                        ["warn", { "maxNumericValue": resources.unused_javascript }],
                    "unused-css-rules": ["warn", { "maxNumericValue": resources.unused_css }],
                    "total-byte-weight":
                        ["warn", { "maxNumericValue": resources.total_byte_weight }],
                },
            },
            "upload": {
                "target": "temporary-public-storage",
            },
        },
    })
}

/// Static bundle-composition report settings.
pub fn bundle_analyzer_config() -> Value {
    json!({
        "analyzerMode": "static",
        "reportFilename": "bundle-report.html",
        "openAnalyzer": false,
        "generateStatsFile": true,
        "statsFilename": "bundle-stats.json",
    })
}

//! The performance budget registry.
//!
//! Budgets are an immutable configuration value constructed once at process
//! start and passed by reference into the locator, evaluator, and renderer.
//! The built-in defaults can be overridden from a JSON file whose keys use
//! the same `SCREAMING_SNAKE_CASE` spelling as the field names below; a
//! partial file overrides only the groups and fields it names.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Named byte ceilings for each chunk class. All limits apply to the gzipped
/// size except `total_build`, which is checked against raw bytes on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct BundleSizes {
    /// Vendor libraries chunk (React, ReactDOM, and friends)
    pub vendor_chunk: u64,
    /// Main application entry chunk
    pub main_app: u64,
    /// Each individual lazy-loaded component chunk
    pub component_chunk: u64,
    /// Icon library chunk
    pub icon_chunk: u64,
    /// All CSS combined
    pub css_bundle: u64,
    /// Entire build output directory, uncompressed
    pub total_build: u64,
}

impl Default for BundleSizes {
    fn default() -> Self {
        Self {
            vendor_chunk: 153_600,   // 150KB
            main_app: 15_360,        // 15KB
            component_chunk: 12_288, // 12KB
            icon_chunk: 8_192,       // 8KB
            css_bundle: 25_600,      // 25KB
            total_build: 256_000,    // 250KB
        }
    }
}

/// Core Web Vitals thresholds. Milliseconds except `cumulative_layout_shift`,
/// which is a unitless score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct CoreWebVitals {
    pub first_contentful_paint: f64,
    pub largest_contentful_paint: f64,
    pub cumulative_layout_shift: f64,
    pub total_blocking_time: f64,
    pub speed_index: f64,
    pub time_to_interactive: f64,
    pub first_meaningful_paint: f64,
}

impl Default for CoreWebVitals {
    fn default() -> Self {
        Self {
            first_contentful_paint: 2000.0,
            largest_contentful_paint: 3000.0,
            cumulative_layout_shift: 0.1,
            total_blocking_time: 500.0,
            speed_index: 3000.0,
            time_to_interactive: 4000.0,
            first_meaningful_paint: 2500.0,
        }
    }
}

/// Minimum Lighthouse category scores on a 0-1 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct LighthouseScores {
    pub performance: f64,
    pub accessibility: f64,
    pub best_practices: f64,
    pub seo: f64,
}

impl Default for LighthouseScores {
    fn default() -> Self {
        Self { performance: 0.85, accessibility: 0.9, best_practices: 0.9, seo: 0.9 }
    }
}

/// Resource optimization limits, in bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct ResourceLimits {
    pub unused_javascript: u64,
    pub unused_css: u64,
    pub total_byte_weight: u64,
    pub image_size_limit: u64,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            unused_javascript: 20_480,  // 20KB
            unused_css: 10_240,         // 10KB
            total_byte_weight: 307_200, // 300KB
            image_size_limit: 51_200,   // 50KB per image
        }
    }
}

/// Thresholds for flagging regressions between builds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct RegressionThresholds {
    /// Fractional bundle size increase considered a regression
    pub bundle_size_increase: f64,
    /// Fractional Lighthouse performance score drop considered a regression
    pub performance_score_drop: f64,
    /// Load time increase in milliseconds considered a regression
    pub load_time_increase: u64,
}

impl Default for RegressionThresholds {
    fn default() -> Self {
        Self { bundle_size_increase: 0.05, performance_score_drop: 0.02, load_time_increase: 200 }
    }
}

/// The complete budget table. Read-only after construction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct PerformanceBudgets {
    pub bundle_sizes: BundleSizes,
    pub core_web_vitals: CoreWebVitals,
    pub lighthouse_scores: LighthouseScores,
    pub resource_limits: ResourceLimits,
    pub regression_thresholds: RegressionThresholds,
}

/// Load budget overrides from a JSON file. Groups and fields absent from the
/// file keep their built-in defaults.
pub fn load_budgets(path: &Path) -> Result<PerformanceBudgets> {
    debug!("Loading budget overrides from {}", path.display());
    let content = fs::read_to_string(path)
        .with_context(|| format!("could not read budget file {}", path.display()))?;
    let budgets: PerformanceBudgets = serde_json::from_str(&content)
        .with_context(|| format!("could not parse budget file {}", path.display()))?;
    info!("Loaded budget overrides from {}", path.display());
    Ok(budgets)
}

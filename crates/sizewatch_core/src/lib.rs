//! Core utilities for sizewatch checks.
//!
//! This crate provides the shared plumbing for verifying front-end build
//! output against performance budgets:
//! - The budget registry (bundle sizes, Core Web Vitals, Lighthouse scores,
//!   resource limits) with JSON override loading
//! - Chunk classification (vendor / main / icons / css / component)
//! - Locating chunk files in a build output directory
//! - Measuring raw, gzipped, and whole-directory sizes
//! - Generating derived configuration for external tooling (bundlesize,
//!   Lighthouse CI, bundle analyzer)

mod budgets;
mod classify;
mod integrations;
mod locator;
mod measure;
mod types;

// Re-export public API
pub use budgets::{
    BundleSizes, CoreWebVitals, LighthouseScores, PerformanceBudgets, RegressionThresholds,
    ResourceLimits, load_budgets,
};
pub use classify::{CLASSIFY_RULES, ChunkCategory, ClassifyRule, classify};
pub use integrations::{bundle_analyzer_config, bundlesize_config, lighthouse_ci_config};
pub use locator::locate_chunks;
pub use measure::{directory_size, file_size, format_bytes, gzipped_size};
pub use types::Artifact;

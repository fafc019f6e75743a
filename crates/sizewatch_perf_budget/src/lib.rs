//! Performance budget verification for front-end build output.
//!
//! This crate discovers chunk files in a build output directory, measures
//! their raw and gzipped sizes, compares them against the budget registry,
//! and renders a pass/fail report suitable for gating CI on.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use sizewatch_perf_budget::{Config, run_perf_budget_check, print_report};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     root: Some(std::path::PathBuf::from("/path/to/project")),
//!     dist_dir: std::path::PathBuf::from("dist"),
//!     budgets: None,
//!     budget_table: Default::default(),
//! };
//!
//! let run = run_perf_budget_check(cfg)?;
//!
//! // Use buffered output for better performance
//! let mut stdout = BufWriter::new(std::io::stdout());
//! print_report(&mut stdout, &run)?;
//! stdout.flush()?;
//!
//! if !run.overall_pass() {
//!     std::process::exit(1);
//! }
//! # Ok(())
//! # }
//! ```

mod checker;
mod config;
mod evaluator;
mod reporter;
mod types;

// Re-export public API
pub use checker::run_perf_budget_check;
pub use config::Config;
pub use evaluator::evaluate;
pub use reporter::{budget_summary, print_report};
pub use types::{CategoryOutcome, CategoryReport, CheckRun, SizeKind, Verdict};

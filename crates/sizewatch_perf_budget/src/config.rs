use anyhow::{Result, anyhow};
use clap::Parser;
use log::{debug, info};
use sizewatch_core::{PerformanceBudgets, load_budgets};
use std::{env, path::PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "perf-budget")]
#[command(about = "Check front-end build output against performance budgets")]
pub struct Config {
    /// Project root containing the build output (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Build output directory, relative to the project root
    #[arg(long, default_value = "dist")]
    pub dist_dir: PathBuf,

    /// JSON file overriding the built-in performance budgets
    #[arg(long)]
    pub budgets: Option<PathBuf>,

    #[clap(skip)]
    pub budget_table: PerformanceBudgets,
}

impl Config {
    /// Initialize the config by resolving the project root and loading budget
    /// overrides when a budget file was given
    pub fn initialize(&mut self) -> Result<()> {
        // Resolve root directory
        let root = if let Some(r) = self.root.take() {
            debug!("Using provided root directory: {:?}", r);
            r.canonicalize().unwrap_or(r)
        } else {
            debug!("No root provided, using current directory");
            env::current_dir()?
        };
        info!("Using root directory: {}", root.display());

        if let Some(path) = &self.budgets {
            debug!("Loading budget overrides from {:?}", path);
            self.budget_table = load_budgets(path)?;
        }

        self.root = Some(root);
        Ok(())
    }

    /// Get the root directory, returning an error if not initialized
    pub fn root(&self) -> Result<&PathBuf> {
        self.root
            .as_ref()
            .ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(root: &std::path::Path) -> Config {
        Config {
            root: Some(root.to_path_buf()),
            dist_dir: PathBuf::from("dist"),
            budgets: None,
            budget_table: PerformanceBudgets::default(),
        }
    }

    #[test]
    fn test_initialize_keeps_provided_root() {
        let temp_dir = TempDir::new().unwrap();
        let mut cfg = config_for(temp_dir.path());
        cfg.initialize().unwrap();
        assert_eq!(
            cfg.root().unwrap().canonicalize().unwrap(),
            temp_dir.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_initialize_loads_budget_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let budget_file = temp_dir.path().join("budgets.json");
        fs::write(&budget_file, r#"{ "BUNDLE_SIZES": { "MAIN_APP": 99 } }"#).unwrap();

        let mut cfg = config_for(temp_dir.path());
        cfg.budgets = Some(budget_file);
        cfg.initialize().unwrap();

        assert_eq!(cfg.budget_table.bundle_sizes.main_app, 99);
        assert_eq!(cfg.budget_table.bundle_sizes.vendor_chunk, 153_600);
    }

    #[test]
    fn test_root_accessor_errors_before_initialize() {
        let cfg = Config {
            root: None,
            dist_dir: PathBuf::from("dist"),
            budgets: None,
            budget_table: PerformanceBudgets::default(),
        };
        assert!(cfg.root().is_err());
    }
}

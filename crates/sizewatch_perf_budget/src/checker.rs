use anyhow::{Result, bail};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use sizewatch_core::{
    Artifact, ChunkCategory, directory_size, file_size, gzipped_size, locate_chunks,
};

use crate::{
    config::Config,
    evaluator::evaluate,
    types::{CategoryOutcome, CategoryReport, CheckRun, SizeKind},
};

fn measure_artifact(path: &Path, category: ChunkCategory) -> Result<Artifact> {
    let raw_bytes = file_size(path);
    let gzip_bytes = gzipped_size(path)?;
    debug!(
        "Measured {} ({}): {} raw, {} gzipped",
        path.display(),
        category.label(),
        raw_bytes,
        gzip_bytes
    );
    Ok(Artifact { path: path.to_path_buf(), category, raw_bytes, gzip_bytes })
}

/// Check the first matching chunk of a single-file category against its
/// budget. Categories with no matching file are skipped with a warning.
fn check_single_chunk(
    name: &'static str,
    label: &str,
    files: &[PathBuf],
    category: ChunkCategory,
    budget: u64,
    files_measured: &mut usize,
) -> CategoryReport {
    let Some(file) = files.first() else {
        warn!("No {} chunk found", category.label());
        return CategoryReport { name, outcome: CategoryOutcome::Missing };
    };

    let outcome = match measure_artifact(file, category) {
        Ok(artifact) => {
            *files_measured += 1;
            CategoryOutcome::Checked(vec![evaluate(
                label,
                artifact.gzip_bytes,
                budget,
                SizeKind::Gzipped,
            )])
        }
        Err(e) => {
            warn!("Measurement failed for {}: {:#}", file.display(), e);
            CategoryOutcome::Failed(format!("{}: {:#}", file.display(), e))
        }
    };

    CategoryReport { name, outcome }
}

/// Check every component chunk independently against the per-chunk budget.
fn check_component_chunks(
    files: &[PathBuf],
    budget: u64,
    files_measured: &mut usize,
) -> CategoryReport {
    let name = "Component chunks";
    if files.is_empty() {
        info!("No component chunks found");
        return CategoryReport { name, outcome: CategoryOutcome::Missing };
    }

    let mut verdicts = Vec::with_capacity(files.len());
    for file in files {
        match measure_artifact(file, ChunkCategory::Component) {
            Ok(artifact) => {
                *files_measured += 1;
                verdicts.push(evaluate(
                    artifact.file_name(),
                    artifact.gzip_bytes,
                    budget,
                    SizeKind::Gzipped,
                ));
            }
            Err(e) => {
                warn!("Measurement failed for {}: {:#}", file.display(), e);
                return CategoryReport {
                    name,
                    outcome: CategoryOutcome::Failed(format!("{}: {:#}", file.display(), e)),
                };
            }
        }
    }

    CategoryReport { name, outcome: CategoryOutcome::Checked(verdicts) }
}

/// Run the full performance budget check: locate chunks under the build
/// directory, measure each, and evaluate the categories in fixed order
/// (vendor, main, components, icons, css, total build).
///
/// A missing build directory is a fatal precondition and fails the run before
/// any category is evaluated.
pub fn run_perf_budget_check(mut cfg: Config) -> Result<CheckRun> {
    info!("Starting performance budget check");

    cfg.initialize()?;
    let root = cfg.root()?.clone();

    let dist = root.join(&cfg.dist_dir);
    if !dist.is_dir() {
        warn!("Build directory {} not found", dist.display());
        bail!(
            "no {} directory found under {}; run the production build first",
            cfg.dist_dir.display(),
            root.display()
        );
    }

    let assets = dist.join("assets");
    let chunks = locate_chunks(&assets)?;
    info!("Located {} classified chunks under {}", chunks.len(), assets.display());

    let of_category = |category: ChunkCategory| -> Vec<PathBuf> {
        chunks.iter().filter(|(_, c)| *c == category).map(|(p, _)| p.clone()).collect()
    };

    let sizes = &cfg.budget_table.bundle_sizes;
    let mut files_measured = 0;
    let mut categories = Vec::with_capacity(6);

    categories.push(check_single_chunk(
        "Vendor bundle",
        "Vendor chunk",
        &of_category(ChunkCategory::Vendor),
        ChunkCategory::Vendor,
        sizes.vendor_chunk,
        &mut files_measured,
    ));
    categories.push(check_single_chunk(
        "Main app bundle",
        "Main app bundle",
        &of_category(ChunkCategory::Main),
        ChunkCategory::Main,
        sizes.main_app,
        &mut files_measured,
    ));
    categories.push(check_component_chunks(
        &of_category(ChunkCategory::Component),
        sizes.component_chunk,
        &mut files_measured,
    ));
    categories.push(check_single_chunk(
        "Icons chunk",
        "Icons chunk",
        &of_category(ChunkCategory::Icons),
        ChunkCategory::Icons,
        sizes.icon_chunk,
        &mut files_measured,
    ));
    categories.push(check_single_chunk(
        "CSS bundle",
        "CSS bundle",
        &of_category(ChunkCategory::Css),
        ChunkCategory::Css,
        sizes.css_bundle,
        &mut files_measured,
    ));

    // The one true aggregate: the whole build directory against TOTAL_BUILD,
    // raw bytes rather than gzipped.
    let total_outcome = match directory_size(&dist) {
        Ok(total) => CategoryOutcome::Checked(vec![evaluate(
            "Total build size",
            total,
            sizes.total_build,
            SizeKind::Raw,
        )]),
        Err(e) => {
            warn!("Could not calculate total build size: {:#}", e);
            CategoryOutcome::Failed(format!("could not calculate total build size: {:#}", e))
        }
    };
    categories.push(CategoryReport { name: "Total build", outcome: total_outcome });

    let run = CheckRun { categories, files_measured };
    info!(
        "Performance budget check complete: {} ({} files measured)",
        if run.overall_pass() { "pass" } else { "fail" },
        run.files_measured
    );
    Ok(run)
}

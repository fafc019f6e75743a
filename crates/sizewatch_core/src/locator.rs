use anyhow::Result;
use ignore::WalkBuilder;
use log::{debug, trace};
use std::path::{Path, PathBuf};

use crate::classify::{ChunkCategory, classify};

/// Locate and classify chunk files under a build assets directory.
///
/// Returns `(path, category)` pairs sorted by path so that repeated runs over
/// an unchanged build produce identical results. An absent directory yields
/// an empty set; per-category "not found" handling is the caller's concern.
pub fn locate_chunks(assets_dir: &Path) -> Result<Vec<(PathBuf, ChunkCategory)>> {
    debug!("Locating chunks under {}", assets_dir.display());
    if !assets_dir.is_dir() {
        debug!("Assets directory {} does not exist", assets_dir.display());
        return Ok(Vec::new());
    }

    // Build output is routinely gitignored, so the walker must not apply the
    // standard ignore-file filters.
    let walker = WalkBuilder::new(assets_dir).standard_filters(false).build();

    let mut chunks: Vec<(PathBuf, ChunkCategory)> = Vec::new();
    for res in walker {
        let dent = res?;
        let p = dent.path();
        if !p.is_file() {
            continue;
        }

        let Some(name) = p.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        match classify(name) {
            Some(category) => {
                trace!("Classified {} as {}", p.display(), category.label());
                chunks.push((p.to_path_buf(), category));
            }
            None => trace!("Skipping unclassified file: {}", p.display()),
        }
    }

    chunks.sort_by(|a, b| a.0.cmp(&b.0));
    debug!("Located {} classified chunks", chunks.len());
    Ok(chunks)
}

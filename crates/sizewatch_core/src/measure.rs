//! Size measurement for build artifacts.
//!
//! Gzipped sizes approximate what a web server transmits under
//! content-encoding compression, which is the quantity most bundle budgets
//! are specified against. Compression and directory sizing run in-process;
//! no external utilities are invoked.

use anyhow::{Context, Result};
use flate2::{Compression, write::GzEncoder};
use ignore::WalkBuilder;
use log::trace;
use std::{
    fs,
    io::Write,
    path::Path,
};

/// Raw byte length of a file on storage. A nonexistent file measures as zero
/// so a missing artifact reports as an empty entry rather than an error.
pub fn file_size(path: &Path) -> u64 {
    let size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
    trace!("Raw size of {}: {} bytes", path.display(), size);
    size
}

/// Gzipped byte length of a file's contents. A nonexistent file measures as
/// zero; a file that exists but cannot be read or compressed is an error the
/// caller must surface rather than mistake for an empty bundle.
pub fn gzipped_size(path: &Path) -> Result<u64> {
    if !path.exists() {
        trace!("Gzipped size of {}: 0 (missing)", path.display());
        return Ok(0);
    }

    let bytes =
        fs::read(path).with_context(|| format!("could not read {}", path.display()))?;

    // Default compression level, matching what `gzip -c` would produce.
    let mut encoder =
        GzEncoder::new(Vec::with_capacity((bytes.len() / 2).max(256)), Compression::default());
    encoder.write_all(&bytes).context("gzip encoding failed")?;
    let compressed = encoder.finish().context("gzip finalize failed")?;

    trace!("Gzipped size of {}: {} bytes", path.display(), compressed.len());
    Ok(compressed.len() as u64)
}

/// Total raw size of every file under a directory, recursively.
pub fn directory_size(dir: &Path) -> Result<u64> {
    let walker = WalkBuilder::new(dir).standard_filters(false).build();

    let mut total: u64 = 0;
    for res in walker {
        let dent = res?;
        let p = dent.path();
        if p.is_file() {
            let meta = fs::metadata(p)
                .with_context(|| format!("could not stat {}", p.display()))?;
            total += meta.len();
        }
    }

    trace!("Directory size of {}: {} bytes", dir.display(), total);
    Ok(total)
}

/// Format a byte count with 1024-based units and at most one decimal place,
/// trimming a trailing `.0`.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{} {}", rounded as u64, UNITS[unit])
    } else {
        format!("{:.1} {}", rounded, UNITS[unit])
    }
}

use std::path::PathBuf;

use crate::classify::ChunkCategory;

/// A discovered build output file with its measured sizes. Built once per
/// check run and read-only afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub path: PathBuf,
    pub category: ChunkCategory,
    pub raw_bytes: u64,
    pub gzip_bytes: u64,
}

impl Artifact {
    /// The artifact's file name for display, falling back to the full path
    /// for paths without a final component.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Result of the filesystem walk: entry counts plus the largest files found
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileSystemMetrics {
    #[serde(default)]
    pub total_files: u64,
    #[serde(default)]
    pub total_dirs: u64,
    /// Largest files seen during the walk, descending by size
    #[serde(default)]
    pub largest_files: Vec<FileEntry>,
}

/// A single file path and its size in bytes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    #[serde(default)]
    pub path: PathBuf,
    #[serde(default)]
    pub size: u64,
}

use serde::Serialize;

use crate::domain::entities::filesystem::{FileEntry, FileSystemMetrics};
use crate::domain::value_objects::Status;

use super::Finding;

/// Files strictly larger than this are flagged. Fixed constant, not part of
/// the configurable threshold tables.
const LARGE_FILE_BYTES: u64 = 1 << 30;

/// Filesystem walk results with oversized files flagged
#[derive(Debug, Clone, Serialize)]
pub struct FileSystemFinding {
    pub total_files: u64,
    pub total_dirs: u64,
    pub large_files: Vec<FileEntry>,
    pub status: Status,
    pub issues: Vec<String>,
}

impl Finding for FileSystemFinding {
    fn status(&self) -> Status {
        self.status
    }
    fn issues(&self) -> &[String] {
        &self.issues
    }
}

#[must_use]
pub fn evaluate(file_system: &FileSystemMetrics) -> FileSystemFinding {
    let large_files: Vec<FileEntry> = file_system
        .largest_files
        .iter()
        .filter(|f| f.size > LARGE_FILE_BYTES)
        .cloned()
        .collect();

    let (status, issues) = if large_files.is_empty() {
        (Status::Normal, Vec::new())
    } else {
        (
            Status::Warning,
            vec![format!("Found {} files larger than 1GB", large_files.len())],
        )
    };

    FileSystemFinding {
        total_files: file_system.total_files,
        total_dirs: file_system.total_dirs,
        large_files,
        status,
        issues,
    }
}

use std::path::PathBuf;

use tracing::debug;
use walkdir::WalkDir;

use crate::application::config::CollectionConfig;
use crate::domain::entities::filesystem::{FileEntry, FileSystemMetrics};

/// Files below this size are never candidates for the largest-files list.
const TRACK_MIN_BYTES: u64 = 1_048_576;

/// Number of largest files kept in the snapshot.
const LARGEST_FILES_LIMIT: usize = 100;

/// Walks a directory tree counting files and directories and tracking the
/// largest files seen.
///
/// Unreadable entries are skipped silently; a diagnostic run on a live host
/// always crosses permission boundaries it cannot enter. The walk stops once
/// `max_files` files have been counted.
pub struct FsWalker {
    root: PathBuf,
    max_files: u64,
    enabled: bool,
}

impl FsWalker {
    #[must_use]
    pub fn new(config: &CollectionConfig) -> Self {
        Self {
            root: config.root_directory.clone(),
            max_files: config.max_files,
            enabled: config.scan_file_system,
        }
    }

    /// Runs the walk. Returns empty metrics when scanning is disabled.
    #[must_use]
    pub fn walk(&self) -> FileSystemMetrics {
        if !self.enabled {
            debug!("filesystem scan disabled");
            return FileSystemMetrics::default();
        }

        let mut total_files = 0_u64;
        let mut total_dirs = 0_u64;
        let mut largest: Vec<FileEntry> = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_map(Result::ok)
        {
            if entry.file_type().is_dir() {
                total_dirs += 1;
                continue;
            }
            if !entry.file_type().is_file() {
                continue;
            }

            total_files += 1;

            if let Ok(metadata) = entry.metadata() {
                let size = metadata.len();
                if size > TRACK_MIN_BYTES {
                    track_largest(&mut largest, entry.path().to_path_buf(), size);
                }
            }

            if total_files >= self.max_files {
                debug!(
                    "file cap reached at {max} files, stopping walk",
                    max = self.max_files
                );
                break;
            }
        }

        FileSystemMetrics {
            total_files,
            total_dirs,
            largest_files: largest,
        }
    }
}

/// Inserts into a descending-by-size list capped at `LARGEST_FILES_LIMIT`.
fn track_largest(largest: &mut Vec<FileEntry>, path: PathBuf, size: u64) {
    if largest.len() == LARGEST_FILES_LIMIT {
        match largest.last() {
            Some(smallest) if smallest.size >= size => return,
            _ => {}
        }
    }

    let position = largest
        .iter()
        .position(|entry| entry.size < size)
        .unwrap_or(largest.len());
    largest.insert(position, FileEntry { path, size });
    largest.truncate(LARGEST_FILES_LIMIT);
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    fn write_file(dir: &std::path::Path, name: &str, size: usize) {
        std::fs::write(dir.join(name), vec![0_u8; size]).expect("write fixture");
    }

    fn walker_for(root: &std::path::Path, max_files: u64) -> FsWalker {
        FsWalker::new(&CollectionConfig {
            root_directory: root.to_path_buf(),
            max_files,
            scan_file_system: true,
        })
    }

    #[test]
    fn counts_files_and_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_file(dir.path(), "a.txt", 10);
        write_file(dir.path(), "b.txt", 20);
        std::fs::create_dir(dir.path().join("sub")).expect("mkdir");
        write_file(&dir.path().join("sub"), "c.txt", 30);

        let metrics = walker_for(dir.path(), 1_000).walk();
        assert_eq!(metrics.total_files, 3);
        // Root itself counts as a directory entry.
        assert_eq!(metrics.total_dirs, 2);
    }

    #[test]
    fn small_files_are_not_tracked_as_largest() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_file(dir.path(), "small.bin", 1024);

        let metrics = walker_for(dir.path(), 1_000).walk();
        assert_eq!(metrics.total_files, 1);
        assert!(metrics.largest_files.is_empty());
    }

    #[test]
    fn large_files_sorted_descending() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_file(dir.path(), "two_mb.bin", 2 * 1024 * 1024);
        write_file(dir.path(), "three_mb.bin", 3 * 1024 * 1024);

        let metrics = walker_for(dir.path(), 1_000).walk();
        assert_eq!(metrics.largest_files.len(), 2);
        assert!(metrics.largest_files[0].size > metrics.largest_files[1].size);
        assert!(metrics.largest_files[0]
            .path
            .ends_with("three_mb.bin"));
    }

    #[test]
    fn walk_stops_at_max_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        for i in 0..10 {
            write_file(dir.path(), &format!("file_{i}.txt"), 1);
        }

        let metrics = walker_for(dir.path(), 4).walk();
        assert_eq!(metrics.total_files, 4);
    }

    #[test]
    fn disabled_scan_returns_empty_metrics() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_file(dir.path(), "a.txt", 10);

        let walker = FsWalker::new(&CollectionConfig {
            root_directory: dir.path().to_path_buf(),
            max_files: 1_000,
            scan_file_system: false,
        });
        let metrics = walker.walk();
        assert_eq!(metrics.total_files, 0);
        assert_eq!(metrics.total_dirs, 0);
    }

    #[test]
    fn missing_root_yields_empty_metrics() {
        let metrics = walker_for(std::path::Path::new("/nonexistent/path"), 1_000).walk();
        assert_eq!(metrics.total_files, 0);
    }

    #[test]
    fn track_largest_caps_the_list() {
        let mut largest = Vec::new();
        for i in 0..(LARGEST_FILES_LIMIT as u64 + 50) {
            track_largest(
                &mut largest,
                PathBuf::from(format!("/f{i}")),
                TRACK_MIN_BYTES + i,
            );
        }
        assert_eq!(largest.len(), LARGEST_FILES_LIMIT);
        // Kept entries are the largest ones, in descending order.
        assert!(largest.windows(2).all(|w| w[0].size >= w[1].size));
        assert_eq!(largest[0].size, TRACK_MIN_BYTES + LARGEST_FILES_LIMIT as u64 + 49);
    }
}

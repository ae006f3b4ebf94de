//! Scan result returned by the tree scanner

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use super::node::Node;

/// A finished scan: the root node plus global counters.
///
/// The counters always equal the root's own aggregates. Owned by the caller;
/// renderers only ever borrow it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    root: Node,
    root_path: PathBuf,
    total_files: usize,
    total_folders: usize,
    total_size: u64,
    scanned_at: DateTime<Local>,
}

impl ScanResult {
    /// Wrap a finished tree, taking the counters from the root's aggregates.
    pub fn from_root(root: Node, root_path: impl Into<PathBuf>, scanned_at: DateTime<Local>) -> Self {
        Self {
            total_files: root.file_count(),
            total_folders: root.folder_count(),
            total_size: root.size(),
            root,
            root_path: root_path.into(),
            scanned_at,
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Resolved, absolute path the scan started from.
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    pub fn total_files(&self) -> usize {
        self.total_files
    }

    pub fn total_folders(&self) -> usize {
        self.total_folders
    }

    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    pub fn scanned_at(&self) -> DateTime<Local> {
        self.scanned_at
    }

    /// Root name for display, falling back to the full path (e.g. for `/`).
    pub fn display_name(&self) -> String {
        if self.root.name().is_empty() {
            self.root_path.display().to_string()
        } else {
            self.root.name().to_string()
        }
    }
}

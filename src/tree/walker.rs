//! TreeScanner - walks a directory and builds the full tree in memory

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::error::{CanopyError, Result};

use super::config::ScanConfig;
use super::filter::FileFilter;
use super::node::Node;
use super::result::ScanResult;
use super::utils::{compare_nodes, extension_of, get_name};

/// Scan `root` with `config`. Shorthand for `TreeScanner::new(config).scan(root)`.
pub fn scan(root: impl AsRef<Path>, config: &ScanConfig) -> Result<ScanResult> {
    TreeScanner::new(config.clone()).scan(root)
}

/// Single-threaded, depth-first directory scanner.
///
/// Holds only its configuration; every call to [`TreeScanner::scan`] builds a
/// fresh tree and fresh counters, so one scanner can be reused freely.
pub struct TreeScanner {
    config: ScanConfig,
}

impl TreeScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Walk the directory at `root`.
    ///
    /// Fails only when the root is missing or not a directory. Entries below
    /// the root that cannot be read are skipped silently.
    pub fn scan(&self, root: impl AsRef<Path>) -> Result<ScanResult> {
        let root = root.as_ref();
        let root_path = root.canonicalize().map_err(|e| CanopyError::io(root, e))?;
        let metadata = fs::metadata(&root_path).map_err(|e| CanopyError::io(&root_path, e))?;
        if !metadata.is_dir() {
            return Err(CanopyError::NotADirectory { path: root_path });
        }

        let scanned_at = Local::now();
        let mut walk = Walk::new(&self.config);
        let tree = walk.walk_dir(&root_path, get_name(&root_path), 0);

        debug_assert_eq!(walk.files, tree.file_count());
        debug_assert_eq!(walk.folders, tree.folder_count());
        debug_assert_eq!(walk.bytes, tree.size());
        info!(
            root = %root_path.display(),
            files = walk.files,
            folders = walk.folders,
            bytes = walk.bytes,
            "scan complete"
        );

        Ok(ScanResult::from_root(tree, root_path, scanned_at))
    }
}

/// Per-call traversal state.
struct Walk<'a> {
    config: &'a ScanConfig,
    filter: FileFilter<'a>,
    /// Canonical identities of the directories on the current path.
    ancestors: Vec<PathBuf>,
    files: usize,
    folders: usize,
    bytes: u64,
}

impl<'a> Walk<'a> {
    fn new(config: &'a ScanConfig) -> Self {
        Self {
            config,
            filter: FileFilter::new(config),
            ancestors: Vec::new(),
            files: 0,
            folders: 0,
            bytes: 0,
        }
    }

    fn at_max_depth(&self, depth: usize) -> bool {
        self.config.max_depth.is_some_and(|max| depth >= max)
    }

    fn walk_dir(&mut self, path: &Path, name: String, depth: usize) -> Node {
        // If at max depth, return the directory but don't descend
        if self.at_max_depth(depth) {
            return Node::directory(name, path, Vec::new(), false);
        }

        // A symlink pointing back up the current path would recurse forever
        let identity = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        if self.ancestors.contains(&identity) {
            debug!(path = %path.display(), "not descending into symlink cycle");
            return Node::directory(name, path, Vec::new(), false);
        }

        let entries = match fs::read_dir(path) {
            Ok(e) => e,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "cannot list directory");
                return Node::directory(name, path, Vec::new(), true);
            }
        };

        self.ancestors.push(identity);
        let mut incomplete = false;
        let mut children = Vec::new();

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "directory listing interrupted");
                    incomplete = true;
                    continue;
                }
            };
            if let Some(child) = self.visit_entry(&entry.path(), depth) {
                children.push(child);
            }
        }

        self.ancestors.pop();
        children.sort_by(compare_nodes);
        Node::directory(name, path, children, incomplete)
    }

    fn visit_entry(&mut self, entry_path: &Path, depth: usize) -> Option<Node> {
        let name = get_name(entry_path);
        if !self.filter.is_visible(&name) {
            debug!(path = %entry_path.display(), "skipping hidden entry");
            return None;
        }

        // Follows symlinks: a link to a directory is walked like a directory
        let metadata = match fs::metadata(entry_path) {
            Ok(m) => m,
            Err(e) => {
                debug!(path = %entry_path.display(), error = %e, "cannot stat entry");
                return None;
            }
        };

        if metadata.is_dir() {
            let child = self.walk_dir(entry_path, name, depth + 1);
            self.folders += 1;
            return Some(child);
        }

        if !self.config.include_files || !metadata.is_file() {
            return None;
        }

        let extension = extension_of(entry_path);
        if !self.filter.accepts_extension(&extension) {
            debug!(path = %entry_path.display(), "filtered by extension");
            return None;
        }

        let size = metadata.len();
        if !self.filter.accepts_size(size) {
            debug!(path = %entry_path.display(), size, "filtered by size");
            return None;
        }

        let modified = metadata.modified().ok().map(DateTime::<Local>::from);
        self.files += 1;
        self.bytes += size;
        Some(Node::file(name, entry_path, size, extension, modified))
    }
}

//! Tree node types shared by the scanner, the renderers and the export format

use std::path::Path;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Kind of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File,
}

/// One entry of a scanned tree.
///
/// Nodes are built bottom-up and never mutated afterwards: a directory's
/// aggregates are computed from its finished children in [`Node::directory`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Directory {
        name: String,
        /// Full path, lossily converted like `name` so any name serializes.
        path: String,
        /// Sum of all descendant file sizes that passed the filters.
        size: u64,
        file_count: usize,
        folder_count: usize,
        /// Listing this directory failed, so `children` may be missing entries.
        #[serde(default)]
        incomplete: bool,
        children: Vec<Node>,
    },
    File {
        name: String,
        path: String,
        size: u64,
        /// Extension including the leading dot as found on disk, or empty.
        extension: String,
        #[serde(default)]
        modified: Option<DateTime<Local>>,
    },
}

impl Node {
    /// Build a directory node, deriving size and counts from `children`.
    pub fn directory(
        name: impl Into<String>,
        path: impl AsRef<Path>,
        children: Vec<Node>,
        incomplete: bool,
    ) -> Self {
        let mut size = 0;
        let mut file_count = 0;
        let mut folder_count = 0;
        for child in &children {
            size += child.size();
            match child {
                Node::Directory {
                    file_count: f,
                    folder_count: d,
                    ..
                } => {
                    file_count += f;
                    folder_count += d + 1;
                }
                Node::File { .. } => file_count += 1,
            }
        }
        Node::Directory {
            name: name.into(),
            path: lossy_path(path.as_ref()),
            size,
            file_count,
            folder_count,
            incomplete,
            children,
        }
    }

    pub fn file(
        name: impl Into<String>,
        path: impl AsRef<Path>,
        size: u64,
        extension: impl Into<String>,
        modified: Option<DateTime<Local>>,
    ) -> Self {
        Node::File {
            name: name.into(),
            path: lossy_path(path.as_ref()),
            size,
            extension: extension.into(),
            modified,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::File { name, .. } | Node::Directory { name, .. } => name,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Node::File { path, .. } | Node::Directory { path, .. } => Path::new(path),
        }
    }

    pub fn size(&self) -> u64 {
        match self {
            Node::File { size, .. } | Node::Directory { size, .. } => *size,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Directory { .. } => NodeKind::Directory,
            Node::File { .. } => NodeKind::File,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    /// Children in stored order; always empty for files.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Directory { children, .. } => children,
            Node::File { .. } => &[],
        }
    }

    /// Recursive file count (0 for files).
    pub fn file_count(&self) -> usize {
        match self {
            Node::Directory { file_count, .. } => *file_count,
            Node::File { .. } => 0,
        }
    }

    /// Recursive folder count, excluding the node itself (0 for files).
    pub fn folder_count(&self) -> usize {
        match self {
            Node::Directory { folder_count, .. } => *folder_count,
            Node::File { .. } => 0,
        }
    }

    /// Total descendants: files plus folders.
    pub fn item_count(&self) -> usize {
        self.file_count() + self.folder_count()
    }

    pub fn extension(&self) -> Option<&str> {
        match self {
            Node::File { extension, .. } => Some(extension),
            Node::Directory { .. } => None,
        }
    }

    pub fn is_incomplete(&self) -> bool {
        matches!(
            self,
            Node::Directory {
                incomplete: true,
                ..
            }
        )
    }
}

fn lossy_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

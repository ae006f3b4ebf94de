//! Error types for scanning and exporting.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to callers.
///
/// Only failures at the scan root are reported; unreadable entries below
/// the root are skipped during traversal and never become errors.
#[derive(Debug, Error)]
pub enum CanopyError {
    /// Scan root does not exist.
    #[error("Directory not found: {path}")]
    NotFound { path: PathBuf },

    /// Scan root exists but is not a directory.
    #[error("Path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Render or export requested before any scan completed.
    #[error("No tree data available, scan a directory first")]
    NoData,

    /// I/O error with path context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Export document could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CanopyError {
    /// Create an I/O error with path context, mapping `NotFound` to its own variant.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}

pub type Result<T> = std::result::Result<T, CanopyError>;

//! Shared utility functions for tree scanning and rendering

use std::cmp::Ordering;
use std::path::Path;

use super::node::Node;

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a size in bytes to human-readable format.
///
/// Binary units with one decimal place; zero is exactly `"0 B"`.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{:.1} {}", value, SIZE_UNITS[unit])
}

/// Check if a base name marks a hidden entry.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Get the base name of a path, lossily converted.
pub fn get_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Extension of a path including the leading dot, or empty.
///
/// Dotfiles such as `.bashrc` and trailing-dot names such as `foo.` have no
/// extension.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Child ordering: directories before files, then case-insensitive by name.
pub fn compare_nodes(a: &Node, b: &Node) -> Ordering {
    b.is_dir()
        .cmp(&a.is_dir())
        .then_with(|| a.name().to_lowercase().cmp(&b.name().to_lowercase()))
        .then_with(|| a.name().cmp(b.name()))
}

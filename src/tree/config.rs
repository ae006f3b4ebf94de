//! Configuration types for tree scanning

use std::collections::BTreeSet;

/// Inclusive byte range for the file-size filter.
///
/// A missing bound is open: `min` defaults to 0 and `max` to unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeRange {
    pub min: Option<u64>,
    pub max: Option<u64>,
}

impl SizeRange {
    pub fn new(min: Option<u64>, max: Option<u64>) -> Self {
        Self { min, max }
    }

    /// Check whether `size` lies within the range, both bounds inclusive.
    pub fn contains(&self, size: u64) -> bool {
        size >= self.min.unwrap_or(0) && self.max.is_none_or(|max| size <= max)
    }
}

/// Filters and limits governing one scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directories at this depth are emitted without children. `None` = unlimited.
    pub max_depth: Option<usize>,
    /// Include entries whose name starts with `.`
    pub show_hidden: bool,
    pub include_files: bool,
    /// Lower-cased, dot-prefixed extensions. `None` = no filter.
    pub extensions: Option<BTreeSet<String>>,
    pub size_range: Option<SizeRange>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            show_hidden: false,
            include_files: true,
            extensions: None,
            size_range: None,
        }
    }
}

impl ScanConfig {
    /// Set the extension allow-list, normalizing each entry to `.ext` lower case.
    ///
    /// Blank entries are dropped. An iterator that yields nothing usable
    /// clears the filter rather than rejecting every file.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: BTreeSet<String> = extensions
            .into_iter()
            .filter_map(|ext| normalize_extension(ext.as_ref()))
            .collect();
        self.extensions = if set.is_empty() { None } else { Some(set) };
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_size_range(mut self, range: Option<SizeRange>) -> Self {
        self.size_range = range;
        self
    }
}

/// Normalize a user-supplied extension: trim, lower-case, ensure a leading dot.
pub fn normalize_extension(ext: &str) -> Option<String> {
    let trimmed = ext.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        return None;
    }
    Some(format!(".{}", trimmed.to_lowercase()))
}

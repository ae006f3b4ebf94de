//! Entry filtering for tree scanning

use std::collections::BTreeSet;

use super::config::{ScanConfig, SizeRange};
use super::utils::is_hidden;

/// Filter compiled from a [`ScanConfig`] for the duration of one scan.
pub struct FileFilter<'a> {
    show_hidden: bool,
    extensions: Option<&'a BTreeSet<String>>,
    size_range: Option<SizeRange>,
}

impl<'a> FileFilter<'a> {
    pub fn new(config: &'a ScanConfig) -> Self {
        Self {
            show_hidden: config.show_hidden,
            extensions: config.extensions.as_ref(),
            size_range: config.size_range,
        }
    }

    /// Hidden check, applied to files and directories alike.
    pub fn is_visible(&self, name: &str) -> bool {
        self.show_hidden || !is_hidden(name)
    }

    /// Check if a file with this extension (dot included, any case) passes.
    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.extensions
            .is_none_or(|allowed| allowed.contains(&extension.to_lowercase()))
    }

    pub fn accepts_size(&self, size: u64) -> bool {
        self.size_range.is_none_or(|range| range.contains(size))
    }
}

//! Holder for the most recent scan, with file-writing conveniences
//!
//! Front ends that scan once and then render or save several outputs keep a
//! `Session`. Each scan replaces the stored result wholesale; nothing is
//! carried over between scans.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{CanopyError, Result};
use crate::output::{RenderConfig, export_data, render_html, render_text};
use crate::tree::{ScanConfig, ScanResult, scan};

#[derive(Debug, Default)]
pub struct Session {
    last: Option<ScanResult>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `root` and keep the result. A failed scan leaves the previous result in place.
    pub fn scan(&mut self, root: impl AsRef<Path>, config: &ScanConfig) -> Result<&ScanResult> {
        let result = scan(root, config)?;
        Ok(&*self.last.insert(result))
    }

    /// The most recent scan, or `NoData` before the first one.
    pub fn result(&self) -> Result<&ScanResult> {
        self.last.as_ref().ok_or(CanopyError::NoData)
    }

    pub fn render_text(&self, config: &RenderConfig) -> Result<String> {
        Ok(render_text(self.result()?, config))
    }

    pub fn render_html(&self, title: &str) -> Result<String> {
        Ok(render_html(self.result()?, title))
    }

    pub fn save_text(&self, path: impl AsRef<Path>, config: &RenderConfig) -> Result<()> {
        let text = self.render_text(config)?;
        write_output(path.as_ref(), &text)
    }

    pub fn export_html(&self, path: impl AsRef<Path>, title: &str) -> Result<()> {
        let html = self.render_html(title)?;
        write_output(path.as_ref(), &html)
    }

    pub fn export_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = export_data(self.result()?).to_json()?;
        write_output(path.as_ref(), &json)
    }
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| CanopyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}

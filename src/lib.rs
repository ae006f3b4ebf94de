//! Canopy - scan a directory once, render it as text, HTML or JSON

pub mod error;
pub mod output;
pub mod session;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{CanopyError, Result};
pub use output::{
    ExportDocument, GlyphSet, GlyphStyle, HtmlRenderer, RenderConfig, ScanInfo, TextRenderer,
    export_data, render_html, render_text,
};
pub use session::Session;
pub use tree::{Node, NodeKind, ScanConfig, ScanResult, SizeRange, TreeScanner, format_size, scan};

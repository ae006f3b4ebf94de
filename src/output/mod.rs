//! Tree rendering
//!
//! This module provides renderers for a finished `ScanResult`:
//! - Indented text diagram with selectable glyph sets
//! - Self-contained interactive HTML page
//! - JSON export that can be parsed back into a `ScanResult`
//!
//! Renderers only borrow the scan and never depend on each other.
//!
//! # Module Structure
//!
//! - `config` - Render configuration types
//! - `glyphs` - Connector glyph sets for the text tree
//! - `icons` - Extension to icon lookup
//! - `utils` - Line truncation and HTML escaping
//! - `text` - Text tree renderer
//! - `html` - HTML renderer
//! - `json` - JSON export

mod config;
mod glyphs;
mod html;
mod icons;
mod json;
mod text;
mod utils;

// Re-export public types and functions
pub use config::{GlyphStyle, RenderConfig};
pub use glyphs::GlyphSet;
pub use html::{HtmlRenderer, render_html};
pub use icons::{DEFAULT_FILE_ICON, DIR_ICON, DIR_OPEN_ICON, file_icon};
pub use json::{ExportDocument, FORMAT_VERSION, ScanInfo, export_data};
pub use text::{TextRenderer, render_text};
pub use utils::{escape_html, truncate_line};

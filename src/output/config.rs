//! Output configuration types

use std::fmt;
use std::str::FromStr;

use super::glyphs::GlyphSet;

const DEFAULT_LINE_WIDTH: usize = 100;

/// Connector style for the text tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GlyphStyle {
    /// Box-drawing characters
    #[default]
    Unicode,
    /// Plain-ASCII equivalents
    Ascii,
    /// Indentation only
    Simple,
}

impl GlyphStyle {
    pub fn glyphs(self) -> GlyphSet {
        match self {
            GlyphStyle::Unicode => GlyphSet::UNICODE,
            GlyphStyle::Ascii => GlyphSet::ASCII,
            GlyphStyle::Simple => GlyphSet::SIMPLE,
        }
    }
}

impl FromStr for GlyphStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unicode" => Ok(GlyphStyle::Unicode),
            "ascii" => Ok(GlyphStyle::Ascii),
            "simple" => Ok(GlyphStyle::Simple),
            other => Err(format!("unknown tree style: {}", other)),
        }
    }
}

impl fmt::Display for GlyphStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GlyphStyle::Unicode => "unicode",
            GlyphStyle::Ascii => "ascii",
            GlyphStyle::Simple => "simple",
        };
        f.write_str(name)
    }
}

/// Configuration for text rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub style: GlyphStyle,
    pub show_size: bool,
    pub show_count: bool,
    /// Lines longer than this many characters are truncated with `...`
    pub max_line_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            style: GlyphStyle::Unicode,
            show_size: true,
            show_count: true,
            max_line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

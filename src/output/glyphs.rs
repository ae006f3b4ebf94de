//! Connector glyph sets for the text tree

/// The four connector strings that define one tree-drawing style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSet {
    /// Connector before a sibling that is not the last
    pub branch: &'static str,
    /// Connector before the last sibling
    pub last: &'static str,
    /// Continuation under a sibling that is not the last
    pub vertical: &'static str,
    /// Continuation under the last sibling
    pub space: &'static str,
}

impl GlyphSet {
    pub const UNICODE: GlyphSet = GlyphSet {
        branch: "├── ",
        last: "└── ",
        vertical: "│   ",
        space: "    ",
    };

    pub const ASCII: GlyphSet = GlyphSet {
        branch: "|-- ",
        last: "`-- ",
        vertical: "|   ",
        space: "    ",
    };

    pub const SIMPLE: GlyphSet = GlyphSet {
        branch: "  ",
        last: "  ",
        vertical: "  ",
        space: "  ",
    };

    pub fn connector(&self, is_last: bool) -> &'static str {
        if is_last { self.last } else { self.branch }
    }

    /// Calculate the prefix for the children of a node.
    pub fn child_prefix(&self, prefix: &str, is_last: bool) -> String {
        if is_last {
            format!("{}{}", prefix, self.space)
        } else {
            format!("{}{}", prefix, self.vertical)
        }
    }
}

//! Text tree formatter
//!
//! This module provides `TextRenderer` which formats a complete scan into
//! an indented diagram using one of the connector glyph sets.

use crate::tree::{Node, ScanResult, format_size};

use super::config::RenderConfig;
use super::glyphs::GlyphSet;
use super::icons::{DIR_ICON, file_icon};
use super::utils::truncate_line;

/// Render `result` as a text diagram.
pub fn render_text(result: &ScanResult, config: &RenderConfig) -> String {
    TextRenderer::new(config.clone()).format(result)
}

/// Formatter for text tree output.
pub struct TextRenderer {
    config: RenderConfig,
    glyphs: GlyphSet,
}

impl TextRenderer {
    pub fn new(config: RenderConfig) -> Self {
        let glyphs = config.style.glyphs();
        Self { config, glyphs }
    }

    /// Header line, a blank line, then one line per node in pre-order.
    pub fn format(&self, result: &ScanResult) -> String {
        let mut lines = vec![self.header(result), String::new()];
        self.format_node(result.root(), "", true, &mut lines);
        lines.join("\n")
    }

    fn header(&self, result: &ScanResult) -> String {
        let mut header = format!("{} {}", DIR_ICON, result.display_name());
        let size = format_size(result.total_size());

        if self.config.show_count {
            header.push_str(&format!(
                " ({} folders, {} files",
                result.total_folders(),
                result.total_files()
            ));
            if self.config.show_size {
                header.push_str(", ");
                header.push_str(&size);
            }
            header.push(')');
        } else if self.config.show_size {
            header.push_str(&format!(" ({})", size));
        }
        header
    }

    /// Name plus the inline annotation for one node.
    fn label(&self, node: &Node) -> String {
        let mut label = node.name().to_string();
        match node {
            Node::Directory { size, .. } => {
                let mut info = Vec::new();
                let items = node.item_count();
                if self.config.show_count && items > 0 {
                    info.push(format!("{} items", items));
                }
                if self.config.show_size && *size > 0 {
                    info.push(format_size(*size));
                }
                if !info.is_empty() {
                    label.push_str(&format!(" ({})", info.join(", ")));
                }
            }
            Node::File { size, .. } => {
                if self.config.show_size {
                    label.push_str(&format!(" ({})", format_size(*size)));
                }
            }
        }
        label
    }

    fn format_node(&self, node: &Node, prefix: &str, is_last: bool, lines: &mut Vec<String>) {
        let icon = match node.extension() {
            Some(ext) => file_icon(ext),
            None => DIR_ICON,
        };
        let line = format!(
            "{}{}{} {}",
            prefix,
            self.glyphs.connector(is_last),
            icon,
            self.label(node)
        );
        lines.push(truncate_line(&line, self.config.max_line_width));

        let children = node.children();
        if children.is_empty() {
            return;
        }
        let child_prefix = self.glyphs.child_prefix(prefix, is_last);
        for (i, child) in children.iter().enumerate() {
            self.format_node(child, &child_prefix, i == children.len() - 1, lines);
        }
    }
}

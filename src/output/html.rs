//! Interactive HTML output
//!
//! Produces one self-contained document: styling and the collapse/expand
//! script are inlined, so the page works offline with no external resources.

use crate::tree::{Node, ScanResult, format_size};

use super::icons::{DIR_ICON, DIR_OPEN_ICON, file_icon};
use super::utils::escape_html;

/// Number of top-level directories expanded when the page loads.
const AUTO_EXPAND: usize = 3;

const STYLE: &str = r#"
        body {
            font-family: 'Consolas', 'Monaco', monospace;
            line-height: 1.4;
            margin: 20px;
            background-color: #f8f9fa;
        }
        .header {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 20px;
            border-radius: 10px;
            margin-bottom: 20px;
            box-shadow: 0 4px 6px rgba(0,0,0,0.1);
        }
        .tree-container {
            background: white;
            padding: 20px;
            border-radius: 10px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
            max-height: 80vh;
            overflow: auto;
        }
        .tree-node {
            margin: 2px 0;
            transition: background-color 0.2s;
        }
        .tree-node:hover {
            background-color: #e9ecef;
            border-radius: 4px;
        }
        .tree-node.directory {
            font-weight: bold;
            color: #495057;
            cursor: pointer;
        }
        .tree-node.root {
            cursor: default;
        }
        .tree-node.file {
            color: #6c757d;
        }
        .tree-toggle {
            display: inline-block;
            width: 20px;
            text-align: center;
            user-select: none;
        }
        .tree-icon {
            margin-right: 5px;
        }
        .tree-name {
            color: #212529;
        }
        .tree-size {
            color: #6c757d;
            font-size: 0.9em;
            margin-left: 10px;
        }
        .tree-children {
            margin-left: 20px;
            border-left: 1px dotted #dee2e6;
            padding-left: 10px;
        }
        .collapsed {
            display: none;
        }
        .stats {
            display: flex;
            justify-content: space-around;
            margin-top: 10px;
        }
        .stat {
            text-align: center;
        }
        .stat-value {
            font-size: 1.5em;
            font-weight: bold;
        }
        .stat-label {
            font-size: 0.9em;
            opacity: 0.8;
        }
"#;

const SCRIPT: &str = r#"
        function toggleNode(element) {
            const children = element.nextElementSibling;
            const toggle = element.querySelector('.tree-toggle');
            if (!children || !children.classList.contains('tree-children')) {
                return;
            }
            const collapsed = children.classList.toggle('collapsed');
            toggle.textContent = collapsed ? '__CLOSED__' : '__OPEN__';
        }

        document.addEventListener('DOMContentLoaded', function () {
            const topLevel = document.querySelectorAll('#root-children > .tree-node.directory');
            topLevel.forEach(function (node, index) {
                if (index < __AUTO_EXPAND__) {
                    toggleNode(node);
                }
            });
        });
"#;

/// Render `result` as a standalone HTML page titled `title`.
pub fn render_html(result: &ScanResult, title: &str) -> String {
    HtmlRenderer::new(title).format(result)
}

/// Formatter for interactive HTML output.
pub struct HtmlRenderer {
    title: String,
}

impl HtmlRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn format(&self, result: &ScanResult) -> String {
        let title = escape_html(&self.title);
        let root = result.root();
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("    <meta charset=\"UTF-8\">\n");
        out.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        out.push_str(&format!("    <title>{}</title>\n", title));
        out.push_str("    <style>");
        out.push_str(STYLE);
        out.push_str("    </style>\n</head>\n<body>\n");

        out.push_str("    <div class=\"header\">\n");
        out.push_str(&format!("        <h1>🌳 {}</h1>\n", title));
        out.push_str("        <div class=\"stats\">\n");
        push_stat(&mut out, &result.total_folders().to_string(), "Folders");
        push_stat(&mut out, &result.total_files().to_string(), "Files");
        push_stat(&mut out, &format_size(result.total_size()), "Total Size");
        out.push_str("        </div>\n    </div>\n\n");

        // Root stays expanded and is not a toggle
        out.push_str("    <div class=\"tree-container\">\n");
        out.push_str(&format!(
            "        <div class=\"tree-node directory root\">\
             <span class=\"tree-toggle\">{}</span>\
             <span class=\"tree-name\">{}</span>\
             <span class=\"tree-size\">({})</span></div>\n",
            DIR_OPEN_ICON,
            escape_html(&result.display_name()),
            directory_info(root)
        ));
        out.push_str("        <div class=\"tree-children\" id=\"root-children\">\n");
        self.format_children(root.children(), 3, &mut out);
        out.push_str("        </div>\n    </div>\n\n");

        let script = SCRIPT
            .replace("__CLOSED__", DIR_ICON)
            .replace("__OPEN__", DIR_OPEN_ICON)
            .replace("__AUTO_EXPAND__", &AUTO_EXPAND.to_string());
        out.push_str("    <script>");
        out.push_str(&script);
        out.push_str("    </script>\n</body>\n</html>\n");
        out
    }

    fn format_children(&self, children: &[Node], depth: usize, out: &mut String) {
        let indent = "    ".repeat(depth);
        for child in children {
            let name = escape_html(child.name());
            match child {
                Node::Directory { children, .. } => {
                    out.push_str(&format!(
                        "{indent}<div class=\"tree-node directory\" onclick=\"toggleNode(this)\">\
                         <span class=\"tree-toggle\">{}</span>\
                         <span class=\"tree-name\">{}</span>\
                         <span class=\"tree-size\">({})</span></div>\n",
                        DIR_ICON,
                        name,
                        directory_info(child)
                    ));
                    if !children.is_empty() {
                        out.push_str(&format!("{indent}<div class=\"tree-children collapsed\">\n"));
                        self.format_children(children, depth + 1, out);
                        out.push_str(&format!("{indent}</div>\n"));
                    }
                }
                Node::File {
                    size, extension, ..
                } => {
                    out.push_str(&format!(
                        "{indent}<div class=\"tree-node file\">\
                         <span class=\"tree-toggle\"> </span>\
                         <span class=\"tree-icon\">{}</span>\
                         <span class=\"tree-name\">{}</span>\
                         <span class=\"tree-size\">({})</span></div>\n",
                        file_icon(extension),
                        name,
                        format_size(*size)
                    ));
                }
            }
        }
    }
}

/// Direct child count and size, e.g. `3 items, 1.5 KB`.
fn directory_info(node: &Node) -> String {
    format!("{} items, {}", node.children().len(), format_size(node.size()))
}

fn push_stat(out: &mut String, value: &str, label: &str) {
    out.push_str("            <div class=\"stat\">\n");
    out.push_str(&format!(
        "                <div class=\"stat-value\">{}</div>\n",
        value
    ));
    out.push_str(&format!(
        "                <div class=\"stat-label\">{}</div>\n",
        label
    ));
    out.push_str("            </div>\n");
}

#[cfg(test)]
mod tests {
    use chrono::Local;

    use super::*;

    fn sample() -> ScanResult {
        let nested = Node::directory(
            "nested",
            "/r/docs/nested",
            vec![Node::file("deep.md", "/r/docs/nested/deep.md", 4, ".md", None)],
            false,
        );
        let docs = Node::directory(
            "docs",
            "/r/docs",
            vec![
                nested,
                Node::file("a <b> & c.txt", "/r/docs/x.txt", 1536, ".txt", None),
            ],
            false,
        );
        let root = Node::directory(
            "r",
            "/r",
            vec![
                docs,
                Node::directory("empty", "/r/empty", Vec::new(), false),
                Node::file("main.py", "/r/main.py", 10, ".py", None),
            ],
            false,
        );
        ScanResult::from_root(root, "/r", Local::now())
    }

    #[test]
    fn test_document_is_self_contained() {
        let html = render_html(&sample(), "Directory Tree - r");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("<script>"));
        assert!(!html.contains("http://"));
        assert!(!html.contains("https://"));
        assert!(!html.contains("<link"));
        assert!(!html.contains("src="));
    }

    #[test]
    fn test_header_stats() {
        let html = render_html(&sample(), "My Tree");
        assert!(html.contains("<title>My Tree</title>"));
        assert!(html.contains("<div class=\"stat-value\">3</div>"));
        assert!(html.contains("<div class=\"stat-value\">3</div>\n                <div class=\"stat-label\">Files</div>"));
        assert!(html.contains(&format_size(1550)));
    }

    #[test]
    fn test_escapes_names_and_title() {
        let html = render_html(&sample(), "<script>alert(1)</script>");
        assert!(html.contains("a &lt;b&gt; &amp; c.txt"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert_eq!(html.matches("<script>").count(), 1);
    }

    #[test]
    fn test_collapsible_structure() {
        let html = render_html(&sample(), "t");
        // root children open, docs and nested collapsed, empty has no block
        assert_eq!(html.matches("class=\"tree-children collapsed\"").count(), 2);
        assert_eq!(html.matches("id=\"root-children\"").count(), 1);
        assert_eq!(html.matches("onclick=\"toggleNode(this)\"").count(), 3);
        assert_eq!(html.matches("<div").count(), html.matches("</div>").count());
    }

    #[test]
    fn test_root_is_not_clickable() {
        let html = render_html(&sample(), "t");
        let root_line = html
            .lines()
            .find(|line| line.contains("tree-node directory root"))
            .unwrap();
        assert!(!root_line.contains("onclick"));
        assert!(html.contains(".tree-node.root {\n            cursor: default;"));
    }

    #[test]
    fn test_directory_item_count_is_direct_children() {
        let html = render_html(&sample(), "t");
        assert!(html.contains("<span class=\"tree-name\">docs</span><span class=\"tree-size\">(2 items, 1.5 KB)</span>"));
        assert!(html.contains("<span class=\"tree-name\">r</span><span class=\"tree-size\">(3 items, 1.5 KB)</span>"));
        assert!(html.contains("<span class=\"tree-size\">(10.0 B)</span>"));
    }

    #[test]
    fn test_script_expands_first_three() {
        let html = render_html(&sample(), "t");
        assert!(html.contains("#root-children > .tree-node.directory"));
        assert!(html.contains("index < 3"));
        assert!(!html.contains("__OPEN__"));
        assert!(html.contains("'📁' : '📂'"));
    }
}

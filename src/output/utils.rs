//! Shared utility functions for output formatting

const ELLIPSIS: &str = "...";

/// Truncate a line to exactly `max_width` characters, ending in `...` when cut.
/// Uses character count (not byte count) to properly handle UTF-8.
///
/// Widths too narrow for the ellipsis cut the line without one.
pub fn truncate_line(line: &str, max_width: usize) -> String {
    if line.chars().count() <= max_width {
        return line.to_string();
    }
    if max_width < ELLIPSIS.len() {
        return line.chars().take(max_width).collect();
    }
    let mut out: String = line.chars().take(max_width - ELLIPSIS.len()).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Escape text for use in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_line_untouched() {
        assert_eq!(truncate_line("hello", 10), "hello");
        assert_eq!(truncate_line("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_long_line() {
        let out = truncate_line("abcdefghij", 8);
        assert_eq!(out, "abcde...");
        assert_eq!(out.chars().count(), 8);
    }

    #[test]
    fn test_truncate_narrow_widths() {
        assert_eq!(truncate_line("abcdef", 0), "");
        assert_eq!(truncate_line("abcdef", 1), "a");
        assert_eq!(truncate_line("abcdef", 2), "ab");
        assert_eq!(truncate_line("abcdef", 3), "...");
        assert_eq!(truncate_line("abcdef", 4), "a...");
        for width in 0..8 {
            let out = truncate_line("├── 📁 abcdef", width);
            assert_eq!(out.chars().count(), width);
        }
    }

    #[test]
    fn test_truncate_utf8() {
        // Box-drawing characters are 3 bytes each
        let line = "├── 📁 ünïcödé name";
        let out = truncate_line(line, 10);
        assert_eq!(out.chars().count(), 10);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }
}

//! HTML string helpers
//!
//! Minimal escaping for interpolating externally supplied text into markup:
//! text nodes, double-quoted attribute values, and CSS url() terms.

/// Escape text for an HTML text node
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text for a double-quoted attribute value
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

/// Quote a source as a CSS url() term.
///
/// Backslashes and double quotes are escaped so the source cannot terminate
/// the CSS string early. The result still needs attribute escaping when
/// placed in a style attribute.
pub fn css_url(source: &str) -> String {
    let mut out = String::with_capacity(source.len() + 7);
    out.push_str("url(\"");
    for c in source.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out.push_str("\")");
    out
}

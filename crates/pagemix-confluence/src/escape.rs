//! Entity escaping for extension parameters.

/// Escape `&`, `<`, `>` and `"` as HTML entities.
///
/// Single quotes pass through: every attribute the macros emit is
/// double-quoted.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

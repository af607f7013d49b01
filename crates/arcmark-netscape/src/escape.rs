//! Field escaping for bookmark output
//!
//! Two distinct profiles, applied field by field: one for display text
//! (folder names, tab titles), one for URLs inside HREF attributes. Each
//! runs in a single pass over the input, so entities introduced by the
//! translation are never re-escaped. Apply a profile exactly once:
//! escaping already-escaped text double-escapes every ampersand.

/// Escape folder names and tab titles for HTML element content.
pub fn text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape tab URLs for use inside a double-quoted HREF attribute.
pub fn url(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            ' ' => out.push_str("%20"),
            _ => out.push(ch),
        }
    }
    out
}

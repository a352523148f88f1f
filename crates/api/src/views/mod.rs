//! Server-rendered HTML.
//!
//! Fragments are plain functions returning markup `String`s; handlers wrap
//! them in [`axum::response::Html`]. Element ids and `hx-*` attributes are
//! the contract the htmx frontend swaps against — the integration tests
//! assert on them.

pub mod items;
pub mod pages;
pub mod products;

/// Escape text for interpolation into HTML.
pub fn escape(text: &str) -> String {
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

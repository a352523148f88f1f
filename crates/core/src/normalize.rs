//! Catalog name normalization.
//!
//! Display names are free-form ("Молоко 3.2% 🥛"); matching and ordering
//! work on a canonical key with everything but letters, digits and spaces
//! stripped out.

/// Map a display name to its canonical matching key.
///
/// Keeps ASCII Latin letters, Cyrillic letters, decimal digits and spaces;
/// lowercases; trims surrounding whitespace.
///
/// Total and idempotent: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| is_kept(*c))
        .flat_map(char::to_lowercase)
        .collect::<String>()
        .trim()
        .to_string()
}

/// Normalize a search query, returning `None` when nothing searchable
/// remains (an empty query matches the whole catalog).
pub fn normalize_query(query: &str) -> Option<String> {
    let normalized = normalize(query);
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Build a SQL `LIKE` pattern matching `normalized` as a substring.
/// Pattern metacharacters are escaped for use with `ESCAPE '\'`.
pub fn like_pattern(normalized: &str) -> String {
    let escaped = normalized
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

fn is_kept(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || c == ' '
        || ('а'..='я').contains(&c)
        || ('А'..='Я').contains(&c)
        || c == 'ё'
        || c == 'Ё'
}

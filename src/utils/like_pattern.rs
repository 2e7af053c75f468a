//! Escaping of user search terms for SQL `LIKE` / `ILIKE`.

/// Escape character used in generated patterns (`ESCAPE '\'`).
pub const LIKE_ESCAPE: char = '\\';

/// Builds a `%term%` pattern in which `%`, `_` and `\` match literally.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

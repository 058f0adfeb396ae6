//! Slugs for heading ids and page anchors

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static NON_SLUG: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\-_]").unwrap());

/// Turn `text` into a url fragment.
///
/// Lower-cases, collapses whitespace runs into `-`, then drops every character outside
/// `[a-z0-9_-]`. Non-ASCII letters are dropped, not transliterated: `über` becomes `ber`.
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let dashed = WHITESPACE_RUN.replace_all(&lower, "-");
    NON_SLUG.replace_all(&dashed, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_examples() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("über"), "ber");
    }

    #[test]
    fn test_slugify_collapses_whitespace() {
        assert_eq!(slugify("Fitting  a\tcurve\n"), "fitting-a-curve-");
        assert_eq!(slugify("snake_case and-dash"), "snake_case-and-dash");
    }
}

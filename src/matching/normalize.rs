//! Text canonicalisation shared by queries, candidates and catalog fields.

use once_cell::sync::Lazy;
use regex::Regex;

static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s\-.]").expect("valid regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Lower-case, drop everything except word characters, whitespace, `-` and
/// `.`, collapse whitespace runs and trim.
///
/// `normalize(normalize(x)) == normalize(x)` for every input.
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let stripped = DISALLOWED.replace_all(&lower, "");
    let collapsed = WHITESPACE.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}

/// Split normalised text into words.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

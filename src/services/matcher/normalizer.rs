//! Text normalization for scraped torrent names and reference names.
//! Produces the comparable token stream used by the ratio scorer.

use regex::Regex;
use std::sync::LazyLock;

/// Runs of characters that are neither whitespace nor word characters.
/// Underscores are word characters for the regex engine, so they are listed explicitly.
static RE_NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^\s\w]|_)+").expect("Invalid regex"));

/// Characters treated as word delimiters in file and release names.
const DELIMITERS: &[char] = &['_', '.'];

/// Normalize a raw name into a lowercase, space-separated token stream.
///
/// Pipeline (order matters):
/// 1. Unicode-aware lowercase
/// 2. Underscores and periods become spaces
/// 3. Each run of punctuation (`+`, `-`, `[`, `]`, `(`, `)`, `:` ...) becomes one space
/// 4. Whitespace runs collapse to a single space, ends trimmed
///
/// Empty input and input without any alphanumeric content both yield `""`.
pub fn normalize(raw: &str) -> String {
    let lower = raw.to_lowercase();
    let spaced = lower.replace(DELIMITERS, " ");
    let stripped = RE_NON_WORD.replace_all(&spaced, " ");
    collapse_whitespace(&stripped)
}

/// Collapse all whitespace runs into single spaces and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "tests/normalizer_tests.rs"]
mod tests;

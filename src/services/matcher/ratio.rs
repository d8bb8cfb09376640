//! Word-overlap ratio scoring.
//!
//! **Algorithm** (bag of words, not edit distance):
//! 1. Normalize candidate and reference
//! 2. For each distinct candidate word (stopwords excluded), count its occurrences in the reference
//! 3. Each word contributes `chars(word) * count` matched characters
//! 4. Score = `100 * matched / chars(candidate without whitespace)`
//!
//! A word that recurs in the reference contributes once per occurrence, so scores above 100
//! are possible. Thresholds downstream are calibrated to that inflation.

use std::collections::HashMap;

use super::normalizer::normalize;

/// Words ignored when counting overlap.
pub const STOPWORDS: &[&str] = &["and"];

/// Default threshold a score must strictly exceed to count as a match.
pub const DEFAULT_CUTOFF: f64 = 70.0;

/// Score how much of `candidate` is covered by words of `reference`.
///
/// Asymmetric: the denominator is the candidate's character count only.
/// Returns `0.0` when the normalized candidate has no characters.
pub fn ratio(candidate: &str, reference: &str) -> f64 {
    let candidate = normalize(candidate);
    let reference = normalize(reference);

    let total_chars = candidate.chars().filter(|c| !c.is_whitespace()).count();
    if total_chars == 0 {
        return 0.0;
    }

    let counts = word_counts(&candidate, &reference);
    let matched_chars: usize = counts
        .iter()
        .map(|(word, count)| word.chars().count() * count)
        .sum();

    100.0 * matched_chars as f64 / total_chars as f64
}

/// Whether `ratio(candidate, reference)` strictly exceeds `cutoff`.
pub fn is_match(candidate: &str, reference: &str, cutoff: f64) -> bool {
    let score = ratio(candidate, reference);
    log::debug!("{candidate}: {score}");
    score > cutoff
}

/// Map each distinct non-stopword of the normalized candidate to its
/// occurrence count among the normalized reference's words.
fn word_counts<'a>(candidate: &'a str, reference: &str) -> HashMap<&'a str, usize> {
    let reference_words: Vec<&str> = reference.split_whitespace().collect();
    let mut counts = HashMap::new();

    for word in candidate.split_whitespace() {
        if STOPWORDS.contains(&word) || counts.contains_key(word) {
            continue;
        }
        let count = reference_words.iter().filter(|w| **w == word).count();
        counts.insert(word, count);
    }

    counts
}

#[cfg(test)]
#[path = "tests/ratio_tests.rs"]
mod tests;

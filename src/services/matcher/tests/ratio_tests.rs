use super::*;

fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_exact_match_saturates_above_cutoff() {
    let score = ratio("Inception 2010", "Inception 2010");
    approx(score, 100.0);
    assert!(score > DEFAULT_CUTOFF);
}

#[test]
fn test_ratio_is_asymmetric() {
    let forward = ratio("The Thing 2011", "thing");
    let backward = ratio("thing", "The Thing 2011");
    approx(forward, 500.0 / 12.0);
    approx(backward, 100.0);
    assert_ne!(forward, backward);
}

#[test]
fn test_zero_guard_for_empty_candidate() {
    assert_eq!(ratio("!!!", "anything"), 0.0);
    assert_eq!(ratio("", ""), 0.0);
}

#[test]
fn test_recurring_reference_word_inflates_score() {
    // "matrix" appears twice in the reference, so it contributes 2 * 6 chars.
    approx(ratio("Matrix", "matrix.matrix"), 200.0);
}

#[test]
fn test_repeated_candidate_word_counted_once() {
    approx(ratio("go go", "go"), 50.0);
}

#[test]
fn test_stopword_excluded_from_numerator_only() {
    // "and" is skipped when counting overlap but still occupies the denominator.
    approx(ratio("Tom and Jerry", "tom and jerry"), 800.0 / 11.0);
}

#[test]
fn test_denominator_is_character_count_not_word_count() {
    // Character-count, unrounded variant: 8 of 9 letters covered.
    // A word-count denominator would have produced 50.
    approx(ratio("a longword", "longword"), 800.0 / 9.0);
}

#[test]
fn test_unicode_word_lengths_use_chars() {
    approx(ratio("Été 2020", "été"), 300.0 / 7.0);
}

#[test]
fn test_no_overlap_scores_zero() {
    assert_eq!(ratio("Totally New Movie 2021", "The Matrix 1999"), 0.0);
}

#[test]
fn test_is_match_is_strictly_greater() {
    // 7 of 10 characters -> exactly 70, which must not pass a cutoff of 70.
    approx(ratio("abcdefg xyz", "abcdefg"), 70.0);
    assert!(!is_match("abcdefg xyz", "abcdefg", 70.0));
    assert!(is_match("abcdefg xyz", "abcdefg", 69.9));
}

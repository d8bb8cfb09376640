use super::*;

#[test]
fn test_normalize_basic_release_name() {
    assert_eq!(
        normalize("The.Matrix.1999.1080p.BluRay.x264"),
        "the matrix 1999 1080p bluray x264"
    );
}

#[test]
fn test_normalize_strips_punctuation_runs() {
    assert_eq!(
        normalize("[Group] Some-Show (2020) - S01E02 +++ extras:"),
        "group some show 2020 s01e02 extras"
    );
}

#[test]
fn test_normalize_case_and_delimiters_equivalent() {
    assert_eq!(normalize("Foo_Bar.1"), normalize("foo bar 1"));
    assert_eq!(normalize("Foo_Bar.1"), "foo bar 1");
}

#[test]
fn test_normalize_is_idempotent() {
    let samples = [
        "",
        "!!!",
        "The.Thing.2011",
        "  spaced\t\tout  name ",
        "Ünïcödé_Tïtlé.2020",
        "神里綾華 [mod] v2.0",
        "a__b..c--d",
        "Ubuntu 20.04 LTS (amd64)",
    ];
    for sample in samples {
        let once = normalize(sample);
        assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
    }
}

#[test]
fn test_normalize_empty_and_punctuation_only() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("!!!"), "");
    assert_eq!(normalize("._-+[]()"), "");
}

#[test]
fn test_normalize_unicode_lowercase() {
    assert_eq!(normalize("ÉCOLE Été"), "école été");
}

#[test]
fn test_normalize_collapses_whitespace() {
    assert_eq!(normalize("  a \t b\n\nc  "), "a b c");
}

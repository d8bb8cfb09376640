use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_parse_with_and_without_comment() {
    assert_eq!(
        BlacklistEntry::parse("Some.Show* # never again"),
        Some(BlacklistEntry {
            pattern: "Some.Show*".into(),
            comment: Some("never again".into()),
        })
    );
    assert_eq!(
        BlacklistEntry::parse("  *cam*  "),
        Some(BlacklistEntry {
            pattern: "*cam*".into(),
            comment: None,
        })
    );
    assert_eq!(BlacklistEntry::parse("# only a comment"), None);
}

#[test]
fn test_load_keeps_raw_lines_for_classifier() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blacklist");
    fs::write(&path, "Ubuntu* # distro\n\n*sample*\n").unwrap();

    assert_eq!(load_lines(&path).unwrap(), ["Ubuntu* # distro", "*sample*"]);
    let first = BlacklistEntry::parse(&load_lines(&path).unwrap()[0]).unwrap();
    assert_eq!(first.comment.as_deref(), Some("distro"));
}

#[test]
fn test_append_entry_writes_comment() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blacklist");
    let entry = BlacklistEntry {
        pattern: "Bad.Group*".into(),
        comment: Some("fakes".into()),
    };

    append_entry(&path, &entry).unwrap();
    let lines = load_lines(&path).unwrap();
    assert_eq!(lines, ["Bad.Group* # fakes"]);
    assert_eq!(BlacklistEntry::parse(&lines[0]), Some(entry));
}

#[test]
fn test_append_empty_pattern_rejected() {
    let dir = tempdir().unwrap();
    let entry = BlacklistEntry {
        pattern: "  ".into(),
        comment: None,
    };
    assert!(append_entry(&dir.path().join("blacklist"), &entry).is_err());
}

use super::*;
use tempfile::tempdir;

const RESUME: &[u8] =
    b"d10:downloadedi0e11:magnet-infod12:display-name17:Some+Movie+(2020)4:infoi0eee";

#[test]
fn test_parse_display_name() {
    assert_eq!(parse_display_name(RESUME).unwrap(), "Some Movie (2020)");
}

#[test]
fn test_parse_missing_magnet_info() {
    let err = parse_display_name(b"d10:downloadedi0ee").unwrap_err();
    assert!(matches!(err, CuratorError::Torrent(_)));
}

#[test]
fn test_parse_garbage() {
    assert!(parse_display_name(b"not bencode").is_err());
}

#[test]
fn test_directory_scan_skips_bad_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.resume"), RESUME).unwrap();
    fs::write(dir.path().join("b.resume"), b"junk").unwrap();
    fs::create_dir(dir.path().join("subdir")).unwrap();

    assert_eq!(downloading_names(dir.path()).unwrap(), ["Some Movie (2020)"]);
}

#[test]
fn test_missing_directory_is_empty() {
    let dir = tempdir().unwrap();
    assert!(downloading_names(&dir.path().join("torrents")).unwrap().is_empty());
}

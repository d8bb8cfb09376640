use super::*;
use tempfile::tempdir;

#[test]
fn test_parse_file_names() {
    assert_eq!("blacklist".parse::<DataFile>().unwrap(), DataFile::Blacklist);
    assert_eq!(" Pack ".parse::<DataFile>().unwrap(), DataFile::Pack);
    assert_eq!("paths".parse::<DataFile>().unwrap(), DataFile::Paths);
    assert!(matches!(
        "history".parse::<DataFile>(),
        Err(CuratorError::NotFound(_))
    ));
}

#[test]
fn test_add_then_read() {
    let dir = tempdir().unwrap();
    let paths = AppPaths::under(dir.path());

    DataFile::Pack.add(&paths, "Great Films Collection").unwrap();
    DataFile::Pack.add(&paths, "Another Pack").unwrap();

    assert_eq!(
        DataFile::Pack.read(&paths).unwrap(),
        ["Great Films Collection", "Another Pack"]
    );
    assert!(DataFile::Blacklist.read(&paths).unwrap().is_empty());
}

#[test]
fn test_add_blank_rejected() {
    let dir = tempdir().unwrap();
    let paths = AppPaths::under(dir.path());
    assert!(DataFile::Paths.add(&paths, "   ").is_err());
}

#[test]
fn test_scan_roots_prefers_paths_file() {
    let dir = tempdir().unwrap();
    let paths = AppPaths::under(dir.path());
    let fallback = vec![PathBuf::from("/home/someone")];

    assert_eq!(scan_roots(&paths, fallback.clone()).unwrap(), fallback);

    DataFile::Paths.add(&paths, "/media/films").unwrap();
    assert_eq!(
        scan_roots(&paths, fallback).unwrap(),
        [PathBuf::from("/media/films")]
    );
}

use super::*;
use crate::services::matcher::{Category, ClassifierConfig, MatchMode};
use crate::test_utils::{init_test_logger, RecordingSink};
use crate::types::errors::CuratorError;
use std::cell::Cell;
use std::collections::HashMap;
use tempfile::tempdir;

struct FakeSource(HashMap<String, Vec<&'static str>>);

impl FakeSource {
    fn new(pages: &[(&str, &[&'static str])]) -> Self {
        Self(
            pages
                .iter()
                .map(|(url, links)| (url.to_string(), links.to_vec()))
                .collect(),
        )
    }
}

impl MagnetSource for FakeSource {
    fn magnets(&self, url: &str) -> CuratorResult<Vec<Magnet>> {
        let links = self
            .0
            .get(url)
            .ok_or_else(|| CuratorError::Http(format!("GET {url} returned HTTP 404")))?;
        Ok(links.iter().filter_map(|l| Magnet::parse(l)).collect())
    }
}

#[derive(Default)]
struct RecordingAdder(Vec<String>);

impl TorrentAdder for RecordingAdder {
    fn add_torrent(&mut self, magnet_uri: &str) -> CuratorResult<()> {
        self.0.push(magnet_uri.to_string());
        Ok(())
    }
}

const UBUNTU: &str = "magnet:?xt=urn:btih:1&dn=Ubuntu.20.04";
const MATRIX: &str = "magnet:?xt=urn:btih:2&dn=The.Matrix.1999";
const NEW_FILM: &str = "magnet:?xt=urn:btih:3&dn=Totally.New.Movie.2021";

fn classifier() -> Classifier<RecordingSink> {
    init_test_logger();
    Classifier::new(
        vec![
            Category::new("blacklisted", MatchMode::Glob, ["Ubuntu*"]),
            Category::new("owned", MatchMode::Ratio, ["The Matrix 1999"]),
        ],
        ClassifierConfig::default(),
        RecordingSink::default(),
    )
    .unwrap()
}

fn no_connect() -> CuratorResult<RecordingAdder> {
    panic!("client must not be contacted")
}

#[test]
fn test_process_page_writes_report_and_keeps_found_magnets() {
    let dir = tempdir().unwrap();
    let source = FakeSource::new(&[("https://t/page/1/", &[UBUNTU, MATRIX, NEW_FILM])]);
    let mut c = classifier();
    let mut lines = Vec::new();

    let run = process_page(&source, &mut c, "https://t/page/1/", dir.path(), |l| {
        lines.push(l.to_string())
    })
    .unwrap();

    assert_eq!(lines.len(), 3);
    assert_eq!(run.found.len(), 1);
    assert_eq!(run.found[0].uri, NEW_FILM);

    let report = run.report.unwrap();
    assert!(report.contains("FOUND: 1    BLACKLISTED: 1    OWNED: 1"));
    assert!(report.contains("[BLACKLISTED] Ubuntu_20_04"));
    assert!(report.contains("[FOUND] Totally_New_Movie_2021"));
    assert_eq!(
        fs_read(run.report_path.as_deref().unwrap()),
        report
    );
}

fn fs_read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn test_dry_run_prints_report_and_never_connects() {
    let dir = tempdir().unwrap();
    let source = FakeSource::new(&[("https://t/page/1/", &[UBUNTU, NEW_FILM])]);
    let mut c = classifier();
    let mut out = Vec::new();
    let mut progress = |_: &str| {};

    run_pages(
        &source,
        &mut c,
        &["https://t/page/1/".to_string()],
        dir.path(),
        true,
        no_connect,
        RunIo {
            out: &mut out,
            progress: &mut progress,
        },
    )
    .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("page: https://t/page/1/\n"));
    assert!(text.contains("[FOUND] Totally_New_Movie_2021"));
    assert!(text.trim_end().ends_with(INSPECT_ONLY));
}

#[test]
fn test_found_magnets_are_added_with_single_connection() {
    let dir = tempdir().unwrap();
    let source = FakeSource::new(&[
        ("https://t/page/1/", &[UBUNTU, NEW_FILM]),
        ("https://t/page/2/", &["magnet:?xt=urn:btih:4&dn=Another.Find"]),
    ]);
    let mut c = classifier();
    let mut out = Vec::new();
    let mut progress = |_: &str| {};
    let connects = Cell::new(0);

    let runs = run_pages(
        &source,
        &mut c,
        &["https://t/page/1/".to_string(), "https://t/page/2/".to_string()],
        dir.path(),
        false,
        || {
            connects.set(connects.get() + 1);
            Ok(RecordingAdder::default())
        },
        RunIo {
            out: &mut out,
            progress: &mut progress,
        },
    )
    .unwrap();

    assert_eq!(connects.get(), 1);
    assert_eq!(runs.len(), 2);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains(
        "The Following Unmatched Torrents Have Just Been Added:\n- Totally_New_Movie_2021\n"
    ));
    assert!(text.contains("- Another_Find"));
}

#[test]
fn test_nothing_to_add_skips_connection() {
    let dir = tempdir().unwrap();
    let source = FakeSource::new(&[("https://t/", &[UBUNTU, MATRIX])]);
    let mut c = classifier();
    let mut out = Vec::new();
    let mut progress = |_: &str| {};

    run_pages(
        &source,
        &mut c,
        &["https://t/".to_string()],
        dir.path(),
        false,
        no_connect,
        RunIo {
            out: &mut out,
            progress: &mut progress,
        },
    )
    .unwrap();

    assert!(String::from_utf8(out).unwrap().contains(NOTHING_TO_ADD));
}

#[test]
fn test_empty_page_reports_no_results() {
    let dir = tempdir().unwrap();
    let source = FakeSource::new(&[("https://t/", &[])]);
    let mut c = classifier();
    let mut out = Vec::new();
    let mut progress = |_: &str| {};

    let runs = run_pages(
        &source,
        &mut c,
        &["https://t/".to_string()],
        dir.path(),
        false,
        no_connect,
        RunIo {
            out: &mut out,
            progress: &mut progress,
        },
    )
    .unwrap();

    assert!(runs[0].report.is_none());
    assert!(String::from_utf8(out).unwrap().contains(NO_RESULTS));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_scrape_failure_propagates() {
    let dir = tempdir().unwrap();
    let source = FakeSource::new(&[]);
    let mut c = classifier();
    let mut out = Vec::new();
    let mut progress = |_: &str| {};

    let err = run_pages(
        &source,
        &mut c,
        &["https://t/missing".to_string()],
        dir.path(),
        true,
        no_connect,
        RunIo {
            out: &mut out,
            progress: &mut progress,
        },
    )
    .unwrap_err();

    assert!(matches!(err, CuratorError::Http(_)));
}

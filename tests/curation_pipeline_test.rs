//! Reference lists on disk -> classifier -> reports and history, with a
//! canned page source instead of the network.

mod common;

use magcurate_lib::services::app::report_service::{list_reports, view_reports};
use magcurate_lib::services::app::run_service::{run_pages, RunIo, INSPECT_ONLY};
use magcurate_lib::services::catalog::CatalogSources;
use magcurate_lib::services::client::TorrentAdder;
use magcurate_lib::services::config::AppSettings;
use magcurate_lib::services::data_files::history::{record_url, History};
use magcurate_lib::services::data_files::DataFile;
use magcurate_lib::services::matcher::{Classifier, ClassifierConfig, LogSink};
use magcurate_lib::services::torrents::Magnet;
use magcurate_lib::services::web::scraper::extract_magnets;
use magcurate_lib::services::web::{MagnetSource, PageUrl};
use magcurate_lib::types::errors::CuratorResult;
use std::fs;

const PAGE_HTML: &str = r#"
<a href="magnet:?xt=urn:btih:01&amp;dn=Sample.Clip.2020">1</a>
<a href="magnet:?xt=urn:btih:02&amp;dn=Owned.Film.2010">2</a>
<a href="magnet:?xt=urn:btih:03&amp;dn=Fresh.Release.2024">3</a>
"#;

struct StaticPage;

impl MagnetSource for StaticPage {
    fn magnets(&self, _url: &str) -> CuratorResult<Vec<Magnet>> {
        Ok(extract_magnets(PAGE_HTML))
    }
}

struct Unused;

impl TorrentAdder for Unused {
    fn add_torrent(&mut self, _magnet_uri: &str) -> CuratorResult<()> {
        unreachable!("dry run")
    }
}

#[test]
fn dry_run_over_page_range() {
    let ctx = common::init_test_workspace();
    let paths = &ctx.paths;

    DataFile::Blacklist.add(paths, "Sample* # trailers").unwrap();
    let media = paths.data_dir.join("media");
    fs::create_dir_all(&media).unwrap();
    fs::write(media.join("Owned Film 2010.mkv"), "").unwrap();
    DataFile::Paths.add(paths, media.to_str().unwrap()).unwrap();

    let settings = AppSettings::default();
    let sources = CatalogSources {
        paths,
        settings: &settings,
        transmission_dir: None,
    };
    let mut classifier = Classifier::new(
        sources.categories().unwrap(),
        ClassifierConfig {
            cutoff: settings.cutoff,
        },
        LogSink,
    )
    .unwrap();

    let base = "https://tracker.example/browse/page/1/";
    let urls = PageUrl::parse(base).urls(Some("1-2")).unwrap();
    let mut out = Vec::new();
    let mut progress = |_: &str| {};

    let runs = run_pages(
        &StaticPage,
        &mut classifier,
        &urls,
        &paths.report_dir(),
        true,
        || Ok(Unused),
        RunIo {
            out: &mut out,
            progress: &mut progress,
        },
    )
    .unwrap();
    record_url(&paths.history_file(), base).unwrap();

    assert_eq!(runs.len(), 2);
    for run in &runs {
        let names: Vec<&str> = run.found.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Fresh_Release_2024"]);
    }

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches(INSPECT_ONLY).count(), 2);
    assert!(text.contains("page: https://tracker.example/browse/page/2/"));
    assert!(text.contains("[BLACKLISTED] Sample_Clip_2020  # trailers"));
    assert!(text.contains("[OWNED] Owned_Film_2010"));

    assert_eq!(list_reports(&paths.report_dir()).unwrap().len(), 2);
    let latest = view_reports(&paths.report_dir(), 1).unwrap().unwrap();
    assert!(latest.contains("https://tracker.example/browse/page/2/"));

    let history = History::load(&paths.history_file()).unwrap();
    assert_eq!(history.last_url(), Some(base));
}

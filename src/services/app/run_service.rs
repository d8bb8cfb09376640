//! One `run`: scrape each page, classify its magnets, write a report, then
//! either show the report (dry run) or hand found magnets to the client.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use super::report_service::write_report;
use crate::services::client::{add_all, TorrentAdder, NOTHING_TO_ADD};
use crate::services::matcher::tally::render_report;
use crate::services::matcher::{Classifier, IterateOutcome, MatchSink};
use crate::services::torrents::Magnet;
use crate::services::web::MagnetSource;
use crate::types::errors::CuratorResult;

pub const INSPECT_ONLY: &str = "***Nothing Added. Inspecting Only***";
pub const NO_RESULTS: &str = "Search returned no results";

/// What happened on one page.
#[derive(Debug, Clone)]
pub struct PageRun {
    pub url: String,
    /// Rendered report; `None` when the page had no magnets.
    pub report: Option<String>,
    pub report_path: Option<PathBuf>,
    /// Magnets no category claimed, in page order.
    pub found: Vec<Magnet>,
}

/// Scrape and classify a single page, writing its report to `report_dir`.
pub fn process_page<S, K, F>(
    source: &S,
    classifier: &mut Classifier<K>,
    url: &str,
    report_dir: &Path,
    on_progress: F,
) -> CuratorResult<PageRun>
where
    S: MagnetSource + ?Sized,
    K: MatchSink,
    F: FnMut(&str),
{
    let magnets = source.magnets(url)?;
    let outcome =
        classifier.iterate_with_progress(magnets.iter().map(|m| m.name.as_str()), on_progress);

    let tally = match outcome {
        IterateOutcome::NoResults => {
            return Ok(PageRun {
                url: url.to_string(),
                report: None,
                report_path: None,
                found: Vec::new(),
            })
        }
        IterateOutcome::Classified(tally) => tally,
    };

    let report = render_report(url, &tally, classifier.results());
    let report_path = write_report(report_dir, &report, Local::now())?;
    let found = magnets
        .into_iter()
        .filter(|m| classifier.found().contains(&m.name))
        .collect();

    Ok(PageRun {
        url: url.to_string(),
        report: Some(report),
        report_path: Some(report_path),
        found,
    })
}

/// Output and side-effect plumbing for [`run_pages`].
pub struct RunIo<'a> {
    pub out: &'a mut dyn Write,
    pub progress: &'a mut dyn FnMut(&str),
}

/// Process every URL in order.
///
/// `connect` is called at most once, the first time a non-dry page has
/// something to add.
pub fn run_pages<S, K, A, C>(
    source: &S,
    classifier: &mut Classifier<K>,
    urls: &[String],
    report_dir: &Path,
    dry: bool,
    mut connect: C,
    io: RunIo<'_>,
) -> CuratorResult<Vec<PageRun>>
where
    S: MagnetSource + ?Sized,
    K: MatchSink,
    A: TorrentAdder,
    C: FnMut() -> CuratorResult<A>,
{
    let RunIo { out, progress } = io;
    let mut adder: Option<A> = None;
    let mut runs = Vec::with_capacity(urls.len());

    for url in urls {
        writeln!(out, "page: {url}")?;
        let run = process_page(source, classifier, url, report_dir, |line| progress(line))?;

        match &run.report {
            None => writeln!(out, "{NO_RESULTS}")?,
            Some(report) if dry => {
                write!(out, "{report}")?;
                writeln!(out, "{INSPECT_ONLY}")?;
            }
            Some(_) if run.found.is_empty() => writeln!(out, "{NOTHING_TO_ADD}")?,
            Some(_) => {
                if adder.is_none() {
                    adder = Some(connect()?);
                }
                if let Some(client) = adder.as_mut() {
                    let summary = add_all(client, &run.found)?;
                    log::info!("{summary}");
                    writeln!(out, "{summary}")?;
                }
            }
        }
        runs.push(run);
    }

    Ok(runs)
}

#[cfg(test)]
#[path = "tests/run_service_tests.rs"]
mod tests;

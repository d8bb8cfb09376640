//! Per-page classification reports under `<cache>/report/`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::services::fs_utils::file_utils::write_atomic;
use crate::types::errors::CuratorResult;

pub const REPORT_PREFIX: &str = "report-";
pub const NO_REPORTS: &str = "There are no reports to view";
const REPORT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Write `contents` to `report-<timestamp>`.
///
/// Several pages finishing within the same second get `.1`, `.2` ... suffixes
/// so nothing is overwritten and names still sort chronologically.
pub fn write_report(dir: &Path, contents: &str, at: DateTime<Local>) -> CuratorResult<PathBuf> {
    let stem = format!("{REPORT_PREFIX}{}", at.format(REPORT_TIME_FORMAT));
    let mut path = dir.join(&stem);
    let mut n = 1;
    while path.exists() {
        path = dir.join(format!("{stem}.{n}"));
        n += 1;
    }

    write_atomic(&path, contents.as_bytes())?;
    log::info!("Report written to {}", path.display());
    Ok(path)
}

/// Report files, newest first.
pub fn list_reports(dir: &Path) -> CuratorResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut reports: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && report_name(p).is_some())
        .collect();
    reports.sort_by_cached_key(|p| std::cmp::Reverse(report_order(p)));
    Ok(reports)
}

/// `(timestamp, collision suffix)`, so `.10` sorts after `.9`.
fn report_order(path: &Path) -> (String, u32) {
    let name = report_name(path).unwrap_or_default();
    match name.split_once('.') {
        Some((stamp, n)) => (stamp.to_string(), n.parse().unwrap_or(0)),
        None => (name.to_string(), 0),
    }
}

/// Timestamp part of a report file name.
pub fn report_name(path: &Path) -> Option<&str> {
    path.file_name()?.to_str()?.strip_prefix(REPORT_PREFIX)
}

/// The `revision` most recent reports, newest first, each headed by its
/// timestamp. `None` when there are no reports at all.
pub fn view_reports(dir: &Path, revision: usize) -> CuratorResult<Option<String>> {
    let reports = list_reports(dir)?;
    if reports.is_empty() {
        return Ok(None);
    }

    let mut out = String::new();
    for path in reports.iter().take(revision.max(1)) {
        out.push_str(report_name(path).unwrap_or_default());
        out.push('\n');
        out.push_str(&fs::read_to_string(path)?);
        if !out.ends_with('\n') {
            out.push('\n');
        }
    }
    Ok(Some(out))
}

/// Delete every report. Returns how many were removed.
pub fn clear_reports(dir: &Path) -> CuratorResult<usize> {
    let reports = list_reports(dir)?;
    for path in &reports {
        fs::remove_file(path)?;
    }
    Ok(reports.len())
}

#[cfg(test)]
#[path = "tests/report_service_tests.rs"]
mod tests;

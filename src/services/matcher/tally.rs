//! Tally rendering: the live progress line and the per-run text report.

use crate::types::report::{ClassificationResult, Tally, FOUND_LABEL};

/// Width of the separator lines framing a report header.
const SEPARATOR_WIDTH: usize = 80;

/// Gap between header fields.
const FIELD_GAP: &str = "    ";

/// Single-line progress summary: `found: N    rejected: M`.
pub fn display_tally(found: usize, rejected: usize) -> String {
    format!("found: {found}{FIELD_GAP}rejected: {rejected}")
}

/// Counts line: `FOUND: n    BLACKLISTED: n    OWNED: n ...` in category order.
pub fn header_line(tally: &Tally) -> String {
    let mut fields = vec![format!("{FOUND_LABEL}: {}", tally.found)];
    fields.extend(
        tally
            .categories
            .iter()
            .map(|c| format!("{}: {}", c.name.to_uppercase(), c.count)),
    );
    fields.join(FIELD_GAP)
}

/// One report line per candidate: `[LABEL] name`, with `  # comment` for
/// blacklist hits that carried one.
pub fn result_line(result: &ClassificationResult) -> String {
    let mut line = format!("[{}] {}", result.label(), result.candidate_name);
    if let Some(comment) = &result.comment {
        line.push_str("  # ");
        line.push_str(comment);
    }
    line
}

/// Full text report for one scraped page.
pub fn render_report(url: &str, tally: &Tally, results: &[ClassificationResult]) -> String {
    let separator = "-".repeat(SEPARATOR_WIDTH);
    let mut report = format!("{separator}\n{}\n{separator}\n{url}\n", header_line(tally));
    for result in results {
        report.push_str(&result_line(result));
        report.push('\n');
    }
    report
}

#[cfg(test)]
#[path = "tests/tally_tests.rs"]
mod tests;

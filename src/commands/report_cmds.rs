use anyhow::Result;

use crate::services::app::report_service::{view_reports, NO_REPORTS};
use crate::services::config::AppPaths;

/// Print the `revision` most recent reports, newest first.
pub fn view(paths: &AppPaths, revision: usize) -> Result<()> {
    match view_reports(&paths.report_dir(), revision)? {
        Some(text) => print!("{text}"),
        None => println!("{NO_REPORTS}"),
    }
    Ok(())
}

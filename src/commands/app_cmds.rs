use std::fs;

use anyhow::Result;

use crate::cli::ClearTarget;
use crate::services::app::log_service::read_last_n_lines;
use crate::services::app::report_service::clear_reports;
use crate::services::config::AppPaths;

pub fn clear(paths: &AppPaths, targets: &[ClearTarget]) -> Result<()> {
    for target in targets {
        match target {
            ClearTarget::History => {
                let path = paths.history_file();
                if path.exists() {
                    fs::remove_file(&path)?;
                }
                println!("history cleared");
            }
            ClearTarget::Reports => {
                let removed = clear_reports(&paths.report_dir())?;
                println!("reports cleared ({removed})");
            }
        }
        log::info!("Cleared {target:?}");
    }
    Ok(())
}

/// Print the last `lines` lines of the log file.
pub fn show_log(paths: &AppPaths, lines: usize) -> Result<()> {
    for line in read_last_n_lines(&paths.log_file(), lines)? {
        println!("{line}");
    }
    Ok(())
}

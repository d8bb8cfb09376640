//! Application log setup and access.

use std::fs::{self, OpenOptions};
use std::io::{BufRead, Write};
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::types::errors::CuratorResult;

pub const LOG_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Send all `log` output to `log_file` (appending).
///
/// The default level is `info`, `debug` with `debug = true`; `RUST_LOG`
/// overrides both.
pub fn init_logging(log_file: &Path, debug: bool) -> CuratorResult<()> {
    if let Some(parent) = log_file.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;

    let default_level = if debug { "debug" } else { "info" };
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level));
    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} {}",
                chrono::Local::now().format(LOG_TIME_FORMAT),
                record.level(),
                record.args()
            )
        })
        .target(Target::Pipe(Box::new(file)));

    // A logger may already be installed (tests, repeated calls); keep it.
    if let Err(e) = builder.try_init() {
        log::debug!("Logger already initialised: {e}");
    }
    Ok(())
}

/// Read the last `n` lines from a log file at `log_path`.
/// Returns a single-element vec with a notice if the file does not exist.
pub fn read_last_n_lines(log_path: &Path, n: usize) -> CuratorResult<Vec<String>> {
    if !log_path.exists() {
        return Ok(vec!["Log file not found.".to_string()]);
    }

    let file = fs::File::open(log_path)?;
    let reader = std::io::BufReader::new(file);
    let all_lines = reader.lines().collect::<Result<Vec<String>, _>>()?;

    let skip = all_lines.len().saturating_sub(n);
    Ok(all_lines.into_iter().skip(skip).collect())
}

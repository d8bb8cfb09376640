use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::services::app::run_service::{run_pages, RunIo};
use crate::services::catalog::CatalogSources;
use crate::services::client;
use crate::services::config::{AppPaths, ConfigService};
use crate::services::data_files::history::{record_url, History};
use crate::services::matcher::{Classifier, ClassifierConfig, LogSink};
use crate::services::web::{HttpMagnetSource, PageUrl};
use crate::types::errors::CuratorError;

#[derive(Debug, Default)]
pub struct RunArgs {
    pub url: Option<String>,
    pub pages: Option<String>,
    pub dry: bool,
    pub torrent_dir: Option<PathBuf>,
}

/// The URL to scrape: the one given, else the most recent in history.
pub fn resolve_url(url: Option<String>, history_file: &Path) -> Result<String> {
    if let Some(url) = url {
        return Ok(url);
    }
    let history = History::load(history_file).context("read search history")?;
    history
        .last_url()
        .map(str::to_string)
        .context("No previous search in history; pass --url")
}

pub fn run(paths: &AppPaths, args: RunArgs) -> Result<()> {
    let settings = ConfigService::new(paths.config_file()).get_settings();
    let url = resolve_url(args.url, &paths.history_file())?;
    let urls = PageUrl::parse(&url).urls(args.pages.as_deref())?;
    let transmission_dir = args
        .torrent_dir
        .or_else(|| settings.resolved_transmission_dir());

    let sources = CatalogSources {
        paths,
        settings: &settings,
        transmission_dir: transmission_dir.clone(),
    };
    let categories = sources.categories().context("load reference lists")?;
    let mut classifier = Classifier::new(
        categories,
        ClassifierConfig {
            cutoff: settings.cutoff,
        },
        LogSink,
    )?;
    let source = HttpMagnetSource::new(&settings.user_agent)?;

    let connect = || {
        let dir = transmission_dir.as_deref().ok_or_else(|| {
            CuratorError::Config("No Transmission directory; pass --torrent-dir".into())
        })?;
        client::connect(dir)
    };

    let mut stdout = io::stdout().lock();
    let mut progress = |line: &str| eprint!("\r{line}");
    run_pages(
        &source,
        &mut classifier,
        &urls,
        &paths.report_dir(),
        args.dry,
        connect,
        RunIo {
            out: &mut stdout,
            progress: &mut progress,
        },
    )?;
    eprintln!();

    record_url(&paths.history_file(), &url).context("record search history")?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/run_cmds_tests.rs"]
mod tests;

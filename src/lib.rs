use anyhow::{Context, Result};
use clap::Parser;

pub mod cli;
pub mod commands;
pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

use cli::Cli;
use services::app::log_service::init_logging;
use services::config::AppPaths;

/// Parse arguments, prepare directories and logging, then run the subcommand.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let _ = dotenvy::dotenv(); // May supply MAGCURATE_RPC_PASSWORD; ignore if missing

    let paths = AppPaths::resolve()?;
    paths.ensure_dirs().context("create application directories")?;
    init_logging(&paths.log_file(), cli.debug)?;
    log::debug!("Starting with {:?}", cli.command);

    commands::dispatch(cli.command, &paths)
}

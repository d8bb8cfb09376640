//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about = "Scrape magnet links, skip what you already have, download the rest")]
pub struct Cli {
    /// Log at debug level
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scrape, classify and add unmatched torrents
    Run {
        /// Page to scrape; defaults to the last URL used
        #[arg(long)]
        url: Option<String>,
        /// Page number `N` or inclusive range `A-B` for /page/<n>/ URLs
        #[arg(long)]
        pages: Option<String>,
        /// Classify and report only; add nothing
        #[arg(long)]
        dry: bool,
        /// Transmission config directory holding settings.json and torrents/
        #[arg(long)]
        torrent_dir: Option<PathBuf>,
    },
    /// Show the most recent reports
    Report {
        /// How many reports to show, newest first
        #[arg(long, short, default_value_t = 1)]
        revision: usize,
    },
    /// View or edit the reference lists
    Files {
        #[command(subcommand)]
        action: FilesAction,
    },
    /// Delete cached data
    Clear {
        #[arg(value_enum, required = true, num_args = 1..)]
        targets: Vec<ClearTarget>,
    },
    /// Print the tail of the log file
    Log {
        #[arg(long, short, default_value_t = 50)]
        lines: usize,
    },
}

#[derive(Subcommand, Debug)]
pub enum FilesAction {
    /// Append an entry (blacklist entries may carry `# comment`)
    Add { file: String, entry: String },
    /// Print every entry
    View { file: String },
    /// Open the file in an editor ($VISUAL, $EDITOR or --editor)
    Edit {
        file: String,
        #[arg(long)]
        editor: Option<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearTarget {
    History,
    Reports,
}

#[cfg(test)]
#[path = "tests/cli_tests.rs"]
mod tests;

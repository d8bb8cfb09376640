pub mod app_cmds;
pub mod files_cmds;
pub mod report_cmds;
pub mod run_cmds;

use anyhow::Result;

use crate::cli::{Command, FilesAction};
use crate::services::config::AppPaths;

/// Route a parsed subcommand to its handler.
pub fn dispatch(command: Command, paths: &AppPaths) -> Result<()> {
    match command {
        Command::Run {
            url,
            pages,
            dry,
            torrent_dir,
        } => run_cmds::run(
            paths,
            run_cmds::RunArgs {
                url,
                pages,
                dry,
                torrent_dir,
            },
        ),
        Command::Report { revision } => report_cmds::view(paths, revision),
        Command::Files { action } => match action {
            FilesAction::Add { file, entry } => files_cmds::add(paths, &file, &entry),
            FilesAction::View { file } => files_cmds::view(paths, &file),
            FilesAction::Edit { file, editor } => files_cmds::edit(paths, &file, editor),
        },
        Command::Clear { targets } => app_cmds::clear(paths, &targets),
        Command::Log { lines } => app_cmds::show_log(paths, lines),
    }
}

use std::path::Path;
use std::process;

use anyhow::{bail, Context, Result};

use crate::services::config::AppPaths;
use crate::services::data_files::blacklist::{append_entry, BlacklistEntry};
use crate::services::data_files::DataFile;

pub fn add(paths: &AppPaths, file: &str, entry: &str) -> Result<()> {
    let data_file: DataFile = file.parse()?;
    match data_file {
        DataFile::Blacklist => {
            let parsed = BlacklistEntry::parse(entry).context("Blacklist entry has no pattern")?;
            append_entry(&data_file.path(paths), &parsed)?;
        }
        _ => data_file.add(paths, entry)?,
    }
    println!("added to {data_file}: {}", entry.trim());
    Ok(())
}

pub fn view(paths: &AppPaths, file: &str) -> Result<()> {
    let data_file: DataFile = file.parse()?;
    let entries = data_file.read(paths)?;
    if entries.is_empty() {
        println!("{data_file} is empty");
    }
    for entry in entries {
        println!("{entry}");
    }
    Ok(())
}

/// `--editor`, then `$VISUAL`, then `$EDITOR`, then `vi`. Blank values are skipped.
pub fn resolve_editor(explicit: Option<String>) -> String {
    choose_editor(
        explicit,
        std::env::var("VISUAL").ok(),
        std::env::var("EDITOR").ok(),
    )
}

fn choose_editor(
    explicit: Option<String>,
    visual: Option<String>,
    editor: Option<String>,
) -> String {
    [explicit, visual, editor]
        .into_iter()
        .flatten()
        .find(|e| !e.trim().is_empty())
        .unwrap_or_else(|| "vi".to_string())
}

pub fn edit(paths: &AppPaths, file: &str, editor: Option<String>) -> Result<()> {
    let data_file: DataFile = file.parse()?;
    let path = data_file.path(paths);
    touch(&path)?;

    let editor = resolve_editor(editor);
    let status = process::Command::new(&editor)
        .arg(&path)
        .status()
        .with_context(|| format!("Failed to launch editor '{editor}'"))?;
    if !status.success() {
        bail!("Editor '{editor}' exited with {status}");
    }
    Ok(())
}

fn touch(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Cannot create {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/files_cmds_tests.rs"]
mod tests;

//! User-editable reference lists (`blacklist`, `pack`, `paths`) and the
//! search history cache.

pub mod blacklist;
pub mod history;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::services::config::AppPaths;
use crate::services::fs_utils::file_utils::{append_line, read_entries};
use crate::types::errors::{CuratorError, CuratorResult};

/// A line-oriented data file the user may view or append to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFile {
    Blacklist,
    Pack,
    Paths,
}

impl DataFile {
    pub const ALL: [DataFile; 3] = [DataFile::Blacklist, DataFile::Pack, DataFile::Paths];

    pub fn name(self) -> &'static str {
        match self {
            DataFile::Blacklist => "blacklist",
            DataFile::Pack => "pack",
            DataFile::Paths => "paths",
        }
    }

    pub fn path(self, paths: &AppPaths) -> PathBuf {
        match self {
            DataFile::Blacklist => paths.blacklist_file(),
            DataFile::Pack => paths.pack_file(),
            DataFile::Paths => paths.paths_file(),
        }
    }

    pub fn read(self, paths: &AppPaths) -> CuratorResult<Vec<String>> {
        Ok(read_entries(&self.path(paths))?)
    }

    pub fn add(self, paths: &AppPaths, entry: &str) -> CuratorResult<()> {
        let entry = entry.trim();
        if entry.is_empty() {
            return Err(CuratorError::Config("Refusing to add an empty entry".into()));
        }
        append_line(&self.path(paths), entry)?;
        log::info!("Added '{entry}' to {}", self.name());
        Ok(())
    }
}

impl fmt::Display for DataFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataFile {
    type Err = CuratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataFile::ALL
            .into_iter()
            .find(|f| f.name() == s.trim().to_lowercase())
            .ok_or_else(|| {
                CuratorError::NotFound(format!(
                    "Unknown file '{s}', expected one of: blacklist, pack, paths"
                ))
            })
    }
}

/// Roots to index for owned files: the `paths` file, then `fallback`.
pub fn scan_roots(paths: &AppPaths, fallback: Vec<PathBuf>) -> CuratorResult<Vec<PathBuf>> {
    let listed = DataFile::Paths.read(paths)?;
    if listed.is_empty() {
        return Ok(fallback);
    }
    Ok(listed.into_iter().map(PathBuf::from).collect())
}

#[cfg(test)]
#[path = "tests/data_files_tests.rs"]
mod tests;

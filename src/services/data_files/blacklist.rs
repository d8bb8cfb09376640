use std::path::Path;

use crate::services::fs_utils::file_utils::{append_line, read_entries};
use crate::services::matcher::classifier::split_comment;
use crate::types::errors::{CuratorError, CuratorResult};

/// A parsed blacklist line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlacklistEntry {
    pub pattern: String,
    pub comment: Option<String>,
}

impl BlacklistEntry {
    pub fn parse(line: &str) -> Option<Self> {
        let (pattern, comment) = split_comment(line);
        if pattern.is_empty() {
            return None;
        }
        Some(Self { pattern, comment })
    }

    /// `pattern` or `pattern # comment`.
    pub fn to_line(&self) -> String {
        match &self.comment {
            Some(c) => format!("{} # {}", self.pattern, c),
            None => self.pattern.clone(),
        }
    }
}

/// Raw blacklist lines. Comments stay attached; the classifier splits them.
pub fn load_lines(path: &Path) -> CuratorResult<Vec<String>> {
    Ok(read_entries(path)?)
}

pub fn append_entry(path: &Path, entry: &BlacklistEntry) -> CuratorResult<()> {
    if entry.pattern.trim().is_empty() {
        return Err(CuratorError::Config("Blacklist pattern is empty".into()));
    }
    append_line(path, &entry.to_line())?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/blacklist_tests.rs"]
mod tests;

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::services::fs_utils::file_utils::write_atomic;
use crate::types::errors::CuratorResult;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub id: u64,
    pub timestamp: String,
    pub url: String,
}

/// Contents of `history.json`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    #[serde(default)]
    pub history: Vec<HistoryRecord>,
}

impl History {
    /// Missing file reads as an empty history.
    pub fn load(path: &Path) -> CuratorResult<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, path: &Path) -> CuratorResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        write_atomic(path, json.as_bytes())?;
        Ok(())
    }

    pub fn last_url(&self) -> Option<&str> {
        self.history.last().map(|r| r.url.as_str())
    }

    /// Append `url` with the next id (0 for the first record).
    pub fn push(&mut self, url: &str, at: DateTime<Local>) -> &HistoryRecord {
        let id = self.history.last().map_or(0, |r| r.id + 1);
        self.history.push(HistoryRecord {
            id,
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
            url: url.to_string(),
        });
        &self.history[self.history.len() - 1]
    }
}

/// Load, append and save in one step.
pub fn record_url(path: &Path, url: &str) -> CuratorResult<()> {
    let mut history = History::load(path)?;
    let id = history.push(url, Local::now()).id;
    history.save(path)?;
    log::debug!("Recorded history #{id}: {url}");
    Ok(())
}

#[cfg(test)]
#[path = "tests/history_tests.rs"]
mod tests;

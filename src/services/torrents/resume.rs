//! Names of torrents the client is already downloading, read from its
//! bencoded resume files (`<transmission_dir>/torrents/*`).

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::types::errors::{CuratorError, CuratorResult};

#[derive(Debug, Deserialize)]
struct ResumeFile {
    #[serde(rename = "magnet-info")]
    magnet_info: Option<MagnetInfo>,
}

#[derive(Debug, Deserialize)]
struct MagnetInfo {
    #[serde(rename = "display-name")]
    display_name: Option<String>,
}

/// Decode one resume file's bytes to its display name (`+` as space).
pub fn parse_display_name(bytes: &[u8]) -> CuratorResult<String> {
    let resume: ResumeFile =
        serde_bencode::from_bytes(bytes).map_err(|e| CuratorError::Torrent(e.to_string()))?;

    resume
        .magnet_info
        .and_then(|info| info.display_name)
        .map(|name| name.replace('+', " "))
        .ok_or_else(|| CuratorError::Torrent("missing magnet-info.display-name".into()))
}

/// Display names of every decodable file in `torrents_dir`.
///
/// A missing directory yields an empty list. Files that fail to decode are
/// logged and skipped.
pub fn downloading_names(torrents_dir: &Path) -> CuratorResult<Vec<String>> {
    if !torrents_dir.is_dir() {
        log::info!("No torrents directory at {}", torrents_dir.display());
        return Ok(Vec::new());
    }

    let mut paths: Vec<_> = fs::read_dir(torrents_dir)?
        .filter_map(|entry| match entry {
            Ok(e) => Some(e.path()),
            Err(e) => {
                log::warn!("Skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|p| p.is_file())
        .collect();
    paths.sort();

    let mut names = Vec::new();
    for path in paths {
        let parsed = fs::read(&path)
            .map_err(CuratorError::from)
            .and_then(|bytes| parse_display_name(&bytes));
        match parsed {
            Ok(name) => names.push(name),
            Err(e) => log::warn!("Could not read {}: {e}", path.display()),
        }
    }
    Ok(names)
}

#[cfg(test)]
#[path = "tests/resume_tests.rs"]
mod tests;

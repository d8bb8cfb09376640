use std::fs;
use std::path::{Path, PathBuf};

use crate::types::errors::{CuratorError, CuratorResult};

const APP_DIR: &str = "magcurate";

/// Every on-disk location the application reads or writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub cache_dir: PathBuf,
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl AppPaths {
    /// Resolve per-user directories for the current platform.
    pub fn resolve() -> CuratorResult<Self> {
        let base = |dir: Option<PathBuf>, kind: &str| {
            dir.map(|d| d.join(APP_DIR))
                .ok_or_else(|| CuratorError::Config(format!("Cannot determine {kind} directory")))
        };
        Ok(Self {
            cache_dir: base(dirs::cache_dir(), "cache")?,
            config_dir: base(dirs::config_dir(), "config")?,
            data_dir: base(dirs::data_dir(), "data")?,
        })
    }

    /// All three roots under one directory. Used by tests.
    pub fn under(root: &Path) -> Self {
        Self {
            cache_dir: root.join("cache"),
            config_dir: root.join("config"),
            data_dir: root.join("data"),
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }

    pub fn blacklist_file(&self) -> PathBuf {
        self.config_dir.join("blacklist")
    }

    pub fn paths_file(&self) -> PathBuf {
        self.config_dir.join("paths")
    }

    pub fn pack_file(&self) -> PathBuf {
        self.data_dir.join("pack")
    }

    pub fn history_file(&self) -> PathBuf {
        self.cache_dir.join("history.json")
    }

    pub fn report_dir(&self) -> PathBuf {
        self.cache_dir.join("report")
    }

    pub fn log_dir(&self) -> PathBuf {
        self.cache_dir.join("log")
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir().join("magcurate.log")
    }

    /// Create every directory that files are later written into.
    pub fn ensure_dirs(&self) -> CuratorResult<()> {
        for dir in [
            &self.config_dir,
            &self.data_dir,
            &self.report_dir(),
            &self.log_dir(),
        ] {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}

/// Default Transmission daemon directory: a sibling of the user config dir.
pub fn default_transmission_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("transmission-daemon"))
}

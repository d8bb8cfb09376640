pub mod models;
pub mod paths;

pub use models::*;
pub use paths::AppPaths;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::services::fs_utils::file_utils::write_atomic;
use crate::types::errors::CuratorResult;

/// Owns `config.json`. Missing or unreadable files fall back to defaults.
pub struct ConfigService {
    path: PathBuf,
    settings: Mutex<AppSettings>,
}

impl ConfigService {
    pub fn new(path: PathBuf) -> Self {
        let settings = Self::load_from_file(&path);
        Self {
            path,
            settings: Mutex::new(settings),
        }
    }

    fn load_from_file(path: &Path) -> AppSettings {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("Failed to read {}: {e}", path.display());
                }
                return AppSettings::default();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("Invalid settings in {}, using defaults: {e}", path.display());
            AppSettings::default()
        })
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn get_settings(&self) -> AppSettings {
        self.settings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn save_settings(&self, new_settings: AppSettings) -> CuratorResult<()> {
        let json = serde_json::to_string_pretty(&new_settings)?;
        write_atomic(&self.path, json.as_bytes())?;

        *self
            .settings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = new_settings;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::paths::default_transmission_dir;
use crate::services::matcher::ratio::DEFAULT_CUTOFF;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0";

fn default_cutoff() -> f64 {
    DEFAULT_CUTOFF
}

fn default_category_order() -> Vec<String> {
    ["blacklisted", "owned", "downloading", "pack"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_glob_categories() -> Vec<String> {
    vec!["blacklisted".into()]
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.into()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Ratio must exceed this for an owned/downloading/pack match.
    #[serde(default = "default_cutoff")]
    pub cutoff: f64,
    /// Categories checked per candidate, first match wins.
    #[serde(default = "default_category_order")]
    pub category_order: Vec<String>,
    #[serde(default = "default_glob_categories")]
    pub glob_categories: Vec<String>,
    /// `None` means `<config_dir>/transmission-daemon`.
    #[serde(default)]
    pub transmission_dir: Option<PathBuf>,
    /// Roots indexed for owned files. Empty means the home directory.
    #[serde(default)]
    pub scan_paths: Vec<PathBuf>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            cutoff: default_cutoff(),
            category_order: default_category_order(),
            glob_categories: default_glob_categories(),
            transmission_dir: None,
            scan_paths: Vec::new(),
            user_agent: default_user_agent(),
        }
    }
}

impl AppSettings {
    pub fn resolved_transmission_dir(&self) -> Option<PathBuf> {
        self.transmission_dir.clone().or_else(default_transmission_dir)
    }

    pub fn resolved_scan_paths(&self) -> Vec<PathBuf> {
        if self.scan_paths.is_empty() {
            dirs::home_dir().into_iter().collect()
        } else {
            self.scan_paths.clone()
        }
    }
}

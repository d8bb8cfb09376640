//! Assembles the reference list behind each classifier category.
//!
//! Built-in categories:
//! - `blacklisted`: raw lines of `<config>/blacklist` (comments kept)
//! - `owned`: basenames indexed under the scan roots
//! - `downloading`: display names from the client's resume files
//! - `pack`: lines of `<data>/pack`
//!
//! Any other name in the category order reads `<config>/<name>` as a list.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::services::config::{AppPaths, AppSettings};
use crate::services::data_files::{blacklist, scan_roots, DataFile};
use crate::services::fs_utils::file_utils::read_entries;
use crate::services::index::index_owned;
use crate::services::matcher::{categories_from_layout, Category};
use crate::services::torrents::resume::downloading_names;
use crate::types::errors::CuratorResult;

pub const BLACKLISTED: &str = "blacklisted";
pub const OWNED: &str = "owned";
pub const DOWNLOADING: &str = "downloading";
pub const PACK: &str = "pack";

/// Where the reference lists come from for one run.
pub struct CatalogSources<'a> {
    pub paths: &'a AppPaths,
    pub settings: &'a AppSettings,
    /// Transmission config dir; `None` leaves `downloading` empty.
    pub transmission_dir: Option<PathBuf>,
}

impl CatalogSources<'_> {
    fn list_for(&self, name: &str) -> CuratorResult<Vec<String>> {
        match name {
            BLACKLISTED => blacklist::load_lines(&self.paths.blacklist_file()),
            OWNED => {
                let roots = scan_roots(self.paths, self.settings.resolved_scan_paths())?;
                Ok(index_owned(&roots))
            }
            DOWNLOADING => match &self.transmission_dir {
                Some(dir) => downloading_names(&dir.join("torrents")),
                None => {
                    log::warn!("No Transmission directory known, skipping downloading list");
                    Ok(Vec::new())
                }
            },
            PACK => DataFile::Pack.read(self.paths),
            other => Ok(read_entries(&custom_list_path(self.paths, other))?),
        }
    }

    /// Every list named in the configured category order.
    pub fn load_lists(&self) -> CuratorResult<HashMap<String, Vec<String>>> {
        let mut lists = HashMap::new();
        for name in &self.settings.category_order {
            let entries = self.list_for(name)?;
            log::info!("{name}: {} reference entries", entries.len());
            lists.insert(name.clone(), entries);
        }
        Ok(lists)
    }

    pub fn categories(&self) -> CuratorResult<Vec<Category>> {
        Ok(categories_from_layout(
            &self.settings.category_order,
            &self.settings.glob_categories,
            self.load_lists()?,
        ))
    }
}

pub fn custom_list_path(paths: &AppPaths, name: &str) -> PathBuf {
    paths.config_dir.join(Path::new(name).file_name().unwrap_or(name.as_ref()))
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;

//! Owned-file index: basenames of everything under the configured roots.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect file and directory basenames below each root, following links.
///
/// Roots are not included themselves. Missing roots and unreadable entries are
/// logged and skipped. The result is sorted and deduplicated.
pub fn index_owned(roots: &[PathBuf]) -> Vec<String> {
    let mut names = BTreeSet::new();
    for root in roots {
        index_root(root, &mut names);
    }
    log::info!("Indexed {} owned names from {} root(s)", names.len(), roots.len());
    names.into_iter().collect()
}

fn index_root(root: &Path, names: &mut BTreeSet<String>) {
    if !root.is_dir() {
        log::warn!("Scan path is not a directory: {}", root.display());
        return;
    }

    for entry in WalkDir::new(root).min_depth(1).follow_links(true) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };
        if let Some(name) = entry.file_name().to_str() {
            names.insert(name.to_string());
        } else {
            log::debug!("Skipping non UTF-8 name: {}", entry.path().display());
        }
    }
}

#[cfg(test)]
#[path = "tests/index_tests.rs"]
mod tests;

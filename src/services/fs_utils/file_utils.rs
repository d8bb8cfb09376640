use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

/// Replace `path` with `contents` via a sibling temp file and rename, so a
/// reader never sees a half-written file. Creates the parent directory.
pub fn write_atomic(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| {
        log::warn!("Atomic persist to {} failed: {}", path.display(), e.error);
        e.error
    })?;
    Ok(())
}

/// Non-blank lines of a text file, trimmed. A missing file reads as empty.
pub fn read_entries(path: &Path) -> std::io::Result<Vec<String>> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("{} does not exist yet, treating as empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e),
    };

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

/// Append one line, creating the file (and its parent) if needed.
pub fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    // Keep entries on their own line even if the file lacks a trailing newline.
    let needs_newline = fs::read(path)
        .map(|bytes| bytes.last().is_some_and(|b| *b != b'\n'))
        .unwrap_or(false);

    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    if needs_newline {
        file.write_all(b"\n")?;
    }
    writeln!(file, "{}", line.trim())
}

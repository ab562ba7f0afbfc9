//! Note-file selection

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::debug;

use crate::{Error, Result};

/// List the regular files directly inside `dir` whose names match `pattern`.
///
/// Does not descend into subdirectories. Names that are not valid UTF-8
/// cannot match and are skipped. Entry order is whatever the directory
/// enumeration yields; callers must not rely on it across runs. A listing
/// failure is the caller's problem to surface, it usually means the tool is
/// pointed at the wrong directory.
pub fn list_note_files(dir: &Path, pattern: &Regex) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| Error::io(&path, e))?;
        if !file_type.is_file() {
            continue;
        }
        match path.file_name().and_then(|n| n.to_str()) {
            Some(name) if pattern.is_match(name) => files.push(path),
            _ => {}
        }
    }
    debug!("matched {} file(s) in {}", files.len(), dir.display());
    Ok(files)
}

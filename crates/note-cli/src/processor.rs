//! Per-file processing and the run driver

use std::path::Path;

use regex::Regex;
use serde_yaml::Mapping;
use tracing::{error, info, warn};

use note_content::frontmatter;
use note_fs::{list_note_files, read_text, write_text};

use crate::error::Result;

/// Process one note file: read, update the front matter, write back only
/// when the content changed.
///
/// Every failure is contained here. Read and write errors are logged and
/// the file is abandoned; a missing or unterminated block, invalid YAML,
/// or a non-mapping block downgrade to "leave the file as it was", which
/// the unchanged-content check then turns into a silent no-op.
pub fn process_file<F>(path: &Path, updater: F)
where
    F: FnOnce(&Mapping) -> Mapping,
{
    let content = match read_text(path) {
        Ok(content) => content,
        Err(e) => {
            error!("failed to read {}: {e}", path.display());
            return;
        }
    };

    let updated = match frontmatter::update_with(&content, updater) {
        Ok(updated) => updated,
        Err(e) => {
            warn!("leaving {} unchanged: {e}", path.display());
            content.clone()
        }
    };

    if updated == content {
        return;
    }

    match write_text(path, &updated) {
        Ok(()) => info!("updated {}", path.display()),
        Err(e) => error!("failed to write {}: {e}", path.display()),
    }
}

/// Scan `dir` for note files and run each through [`process_file`] in
/// sequence.
///
/// Per-file failures never abort the run and never change the exit
/// status. A directory listing failure does propagate: it means the tool
/// is pointed at the wrong place, not that one note is broken.
pub fn run<F>(dir: &Path, pattern: &Regex, updater: F) -> Result<()>
where
    F: Fn(&Mapping) -> Mapping,
{
    let files = list_note_files(dir, pattern)?;
    info!("processing {} note file(s) in {}", files.len(), dir.display());
    for path in &files {
        process_file(path, &updater);
    }
    Ok(())
}

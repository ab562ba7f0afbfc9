//! Whole-file read and atomic write helpers

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::{Error, Result};

/// Read a file's full text content.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Write text to `path` atomically.
///
/// Uses write-to-temp-then-rename: the temp file lives in the same
/// directory (same filesystem, so the rename is atomic), is synced before
/// the rename, and a failure at any step leaves the target untouched.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| Error::io(&temp_path, e))?;
    temp_file.sync_all().map_err(|e| Error::io(&temp_path, e))?;
    drop(temp_file);

    fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn write_then_read_round_trips() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("note.md");
        write_text(&path, "---\nk: 1\n---\nтело").unwrap();
        assert_eq!(read_text(&path).unwrap(), "---\nk: 1\n---\nтело");
    }

    #[test]
    fn write_replaces_existing_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("note.md");
        write_text(&path, "old").unwrap();
        write_text(&path, "new").unwrap();
        assert_eq!(read_text(&path).unwrap(), "new");
    }

    #[test]
    fn write_leaves_no_temp_debris() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("note.md");
        write_text(&path, "content").unwrap();

        let entries: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, vec!["note.md"]);
    }

    #[test]
    fn read_missing_file_is_an_io_error() {
        let temp = TempDir::new().unwrap();
        let err = read_text(&temp.path().join("gone.md")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}

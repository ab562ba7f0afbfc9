//! End-to-end test for the library crates
//!
//! Exercises the complete flow across crate boundaries: file selection ->
//! front-matter update -> conditional rewrite. Binary-level behavior is
//! covered in crates/note-cli/tests/cli_run.rs, where cargo exposes the
//! notes binary to the test harness.

use regex::Regex;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Set up a notes directory with the usual mix of files.
fn setup_notes_dir() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("Книга1.md"),
        "---\ntitle: Война и мир\nrating: 5\n---\n\nЗаметки о книге.\n",
    )
    .unwrap();
    fs::write(
        temp.path().join("Книга2.md"),
        "no front matter here, just text\n",
    )
    .unwrap();
    fs::write(temp.path().join("notes.md"), "---\nk: 1\n---\nunrelated\n").unwrap();
    fs::write(temp.path().join("Книга.txt"), "wrong extension\n").unwrap();
    temp
}

fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap()
}

#[test]
fn library_flow_selects_parses_and_rewrites() {
    let temp = setup_notes_dir();
    let pattern = Regex::new("^Книга.*\\.md$").unwrap();

    let files = note_fs::list_note_files(temp.path(), &pattern).unwrap();
    assert_eq!(files.len(), 2);

    for path in files {
        let content = note_fs::read_text(&path).unwrap();
        match note_content::update_with(&content, Clone::clone) {
            Ok(updated) if updated != content => {
                note_fs::write_text(&path, &updated).unwrap();
            }
            _ => {}
        }
    }

    // The note with front matter was normalized, keys and unicode intact.
    assert_eq!(
        read(temp.path(), "Книга1.md"),
        "---\ntitle: Война и мир\nrating: 5\n---\n\nЗаметки о книге."
    );
    // The note without a block and the unselected files are untouched.
    assert_eq!(
        read(temp.path(), "Книга2.md"),
        "no front matter here, just text\n"
    );
    assert_eq!(read(temp.path(), "notes.md"), "---\nk: 1\n---\nunrelated\n");
    assert_eq!(read(temp.path(), "Книга.txt"), "wrong extension\n");
}

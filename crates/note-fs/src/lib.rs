//! Filesystem surface for the note maintenance tool
//!
//! Note-file selection plus whole-file read and atomic write helpers.

pub mod error;
pub mod io;
pub mod scan;

pub use error::{Error, Result};
pub use io::{read_text, write_text};
pub use scan::list_note_files;

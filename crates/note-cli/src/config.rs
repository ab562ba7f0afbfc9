//! Tool configuration

use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

/// Default name pattern: notes named "Книга…", markdown only.
pub const DEFAULT_NAME_PATTERN: &str = "^Книга.*\\.md$";

/// Where to look for notes and which file names count as notes.
///
/// The pattern is matched against the full file name, so it should stay
/// anchored at both ends as the default is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesConfig {
    pub notes_dir: PathBuf,
    pub name_pattern: String,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            notes_dir: PathBuf::from("."),
            name_pattern: DEFAULT_NAME_PATTERN.to_string(),
        }
    }
}

impl NotesConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Compile the name pattern.
    pub fn compiled_pattern(&self) -> Result<Regex> {
        Regex::new(&self.name_pattern).map_err(|e| CliError::Pattern {
            pattern: self.name_pattern.clone(),
            source: e,
        })
    }
}

//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

use crate::config::NotesConfig;
use crate::error::Result;

/// Keep YAML front matter up to date across a directory of notes
#[derive(Parser, Debug)]
#[command(name = "notes")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan for note files
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Regular expression the full file name must match
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// TOML config file with notes_dir and name_pattern
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Merge the optional config file with command-line overrides.
    ///
    /// Flags win over the file, the file wins over the built-in defaults.
    pub fn resolve_config(&self) -> Result<NotesConfig> {
        let mut config = match &self.config {
            Some(path) => NotesConfig::load(path)?,
            None => NotesConfig::default(),
        };
        if let Some(dir) = &self.dir {
            config.notes_dir = dir.clone();
        }
        if let Some(pattern) = &self.pattern {
            config.name_pattern = pattern.clone();
        }
        Ok(config)
    }
}

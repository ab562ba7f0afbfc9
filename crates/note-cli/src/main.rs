//! Note maintenance CLI
//!
//! Scans a notes directory for files matching a name pattern and runs
//! their YAML front matter through a field updater, rewriting each file
//! only when its content actually changed.

mod cli;
mod config;
mod error;
mod logging;
mod processor;
mod updater;

use clap::Parser;
use colored::Colorize;

use cli::Cli;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init()?;

    let config = cli.resolve_config()?;
    let pattern = config.compiled_pattern()?;
    processor::run(&config.notes_dir, &pattern, updater::inspect)
}

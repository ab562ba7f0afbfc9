//! Process-wide logging setup

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::{CliError, Result};

/// Initialize the tracing subscriber once at process start.
///
/// Formatted, timestamped log lines go to stdout. The `RUST_LOG`
/// environment variable overrides the default `info` threshold.
pub fn init() -> Result<()> {
    let fmt_layer = fmt::layer().with_target(false).with_level(true).compact();

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| CliError::Logging(e.to_string()))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))?;

    Ok(())
}

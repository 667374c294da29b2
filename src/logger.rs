//! File logging for the `log` facade.
//!
//! The terminal belongs to the TUI while the app runs, so log records go to a
//! file under the user's data directory instead of stderr. When logging is
//! disabled the global logger is never installed and every `log::` call is a
//! no-op.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

/// Parse a configured level name, defaulting to `Info` for unknown values.
pub fn level_filter(level: &str) -> LevelFilter {
    LevelFilter::from_str(level).unwrap_or(LevelFilter::Info)
}

/// Location of the log file.
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join("todoterm").join("todoterm.log"))
}

/// Format one record the way it appears in the log file.
pub fn format_line(level: log::Level, target: &str, message: &std::fmt::Arguments<'_>) -> String {
    format!(
        "[{} {:<5} {}] {}",
        Local::now().format("%H:%M:%S%.3f"),
        level,
        target,
        message
    )
}

/// Install the global logger according to `config`.
///
/// Returns the log file path when logging was enabled. Must be called at most
/// once per process.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = get_log_file_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("{}", format_line(record.level(), record.target(), message)))
        })
        .level(level_filter(&config.level))
        // Dependencies are chatty at debug level
        .level_for("hyper_util", LevelFilter::Warn)
        .level_for("reqwest", LevelFilter::Warn)
        .chain(fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?)
        .apply()
        .context("Failed to install logger")?;

    log::info!("todoterm {} started", env!("CARGO_PKG_VERSION"));
    Ok(Some(path))
}

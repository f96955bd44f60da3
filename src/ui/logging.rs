//! Logging utilities
//!
//! This module provides functionality to initialize logging for the
//! application.
//!
//! Logs go to a file rather than stderr; while the pager holds the
//! terminal in raw mode, any stray output would corrupt the screen.

use anyhow::{Context, Result};
use directories::BaseDirs;
use env_logger::{Builder, Target, fmt::TimestampPrecision};
use log::LevelFilter;
use std::fs::File;

/// Initializes the logging system for the application.
///
/// This function sets up the logging configuration, including the
/// log file path, log level, and log format. The log file lives in
/// the user's cache directory as `mdread.log`.
///
/// # Errors
///
/// Returns an error if the cache directory cannot be determined or the
/// log file cannot be opened or created.
pub fn init_logging() -> Result<()>
{
    let base_dirs =
        BaseDirs::new().context("Failed to determine base directories")?;
    let log_path = base_dirs.cache_dir().join("mdread.log");

    let log_file = File::options()
        .append(true)
        .create(true)
        .open(&log_path)
        .context("Failed to open log file")?;

    // Initialize the logger
    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter_module("mdread", LevelFilter::Debug)
        .format_timestamp(Some(TimestampPrecision::Millis))
        .target(Target::Pipe(Box::new(log_file)))
        .init();

    Ok(())
}

// Rust guideline compliant 2026-10-19

//! Tracing subscriber setup for the CLI.
//!
//! Log lines go to stderr so that stdout stays clean for tables and JSON.

use anyhow::{bail, Result};
use tracing::Level;
use tracing_subscriber::fmt;

/// Parses a log level name, case-insensitively.
///
/// # Errors
///
/// Returns an error for names other than error, warn, info, debug and trace.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => bail!("Invalid log level: {}", other),
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if the level name is invalid.
pub fn init(level: &str, json: bool) -> Result<()> {
    let level = parse_log_level(level)?;
    let builder = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr);

    // a subscriber may already be set when running under a test harness
    if json {
        let _ = tracing::subscriber::set_global_default(builder.json().finish());
    } else {
        let _ = tracing::subscriber::set_global_default(builder.finish());
    }

    Ok(())
}

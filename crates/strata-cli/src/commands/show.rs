// Rust guideline compliant 2026-10-19

//! Implementation of the `strata show` command.

use crate::OutputFormatter;
use anyhow::{Context, Result};
use std::path::PathBuf;
use strata_core::{storage, Config, ModuleRecord};
use tracing::warn;

/// Prints the catalog at `input`, or the configured output.
///
/// With `level`, only modules at that level are shown.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read.
pub fn execute(
    config: &Config,
    input: Option<PathBuf>,
    level: Option<u32>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let input = input.unwrap_or_else(|| config.output.clone());
    let catalog = storage::load_catalog(&input)
        .with_context(|| format!("Failed to read catalog {}", input.display()))?;
    if catalog.is_empty() {
        warn!(path = %input.display(), "catalog holds no modules");
    }

    let modules: Vec<ModuleRecord> = match level {
        Some(level) => catalog
            .modules
            .into_iter()
            .filter(|m| m.level == level)
            .collect(),
        None => catalog.modules,
    };

    println!("{}", formatter.format_catalog(&modules));

    Ok(())
}

// Rust guideline compliant 2026-10-19

//! Implementation of the `strata levels` command.
//!
//! Reloads a catalog, recomputes levels from its recorded dependents and
//! optionally writes the result.

use crate::OutputFormatter;
use anyhow::{Context, Result};
use std::path::PathBuf;
use strata_core::pipeline;
use strata_core::{storage, Config};

/// Where the recomputed catalog goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelsTarget {
    /// Print only.
    None,
    /// Overwrite the input catalog.
    InPlace,
    /// Write to a separate file.
    Path(PathBuf),
}

/// Recomputes levels of the catalog at `input`, or the configured output.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read, is inconsistent or
/// cyclic, or the result cannot be written.
pub fn execute(
    config: &Config,
    input: Option<PathBuf>,
    target: LevelsTarget,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let input = input.unwrap_or_else(|| config.output.clone());
    let summary = pipeline::recompute_file(&input)
        .with_context(|| format!("Failed to recompute levels of {}", input.display()))?;

    let destination = match target {
        LevelsTarget::None => None,
        LevelsTarget::InPlace => Some(input),
        LevelsTarget::Path(path) => Some(path),
    };
    if let Some(path) = destination {
        storage::save_catalog(&path, &summary.catalog)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    println!("{}", formatter.format_summary(&summary).trim_end());

    Ok(())
}

// Rust guideline compliant 2026-10-19

//! Implementation of the `strata generate` command.
//!
//! Runs the full pipeline: module list, manifests, dependents, levels and
//! the catalog document.

use crate::{print_success, OutputFormatter};
use anyhow::{Context, Result};
use std::path::PathBuf;
use strata_core::pipeline::{self, RunOptions};
use strata_core::{Config, LocalManifests};

/// Command-line overrides for a generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Module list document.
    pub module_list: Option<PathBuf>,
    /// Catalog output path.
    pub output: Option<PathBuf>,
    /// Directory holding the module checkouts.
    pub manifest_dir: Option<PathBuf>,
    /// Skip every file write.
    pub dry_run: bool,
}

/// Generates the leveled catalog.
///
/// `status` enables the closing status line, colored when `Some(true)`.
///
/// # Errors
///
/// Returns an error if the module list or a build script cannot be read,
/// the dependency data is inconsistent or cyclic, or the catalog cannot be
/// written.
pub fn execute(
    mut config: Config,
    args: GenerateArgs,
    formatter: &dyn OutputFormatter,
    status: Option<bool>,
) -> Result<()> {
    if let Some(path) = args.module_list {
        config.module_list = path;
    }
    if let Some(path) = args.output {
        config.output = path;
    }
    if let Some(path) = args.manifest_dir {
        config.manifest_dir = path;
    }

    let manifests = LocalManifests::new(
        config.manifest_dir.clone(),
        config.build_file.as_str(),
        config.properties_file.as_str(),
    );
    let mut options = RunOptions::from(&config);
    options.write_sorted_list = !args.dry_run;
    options.write_output = !args.dry_run;

    let summary = pipeline::generate(&options, &manifests).with_context(|| {
        format!(
            "Failed to generate levels from {}",
            config.module_list.display()
        )
    })?;

    println!("{}", formatter.format_summary(&summary).trim_end());
    if let (Some(use_color), false) = (status, args.dry_run) {
        print_success(
            &format!(
                "Wrote {} modules to {}",
                summary.catalog.len(),
                config.output.display()
            ),
            use_color,
        );
    }

    Ok(())
}

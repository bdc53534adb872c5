// Rust guideline compliant 2026-10-19

//! Implementation of the `strata init` command.
//!
//! Writes a configuration file holding the default paths, ready to edit.

use crate::print_success;
use anyhow::{bail, Context, Result};
use std::path::Path;
use strata_core::Config;

/// Writes the default configuration to `config_path`.
///
/// # Errors
///
/// Returns an error if:
/// - The file already exists and `force` is not set
/// - The file cannot be written
pub fn execute(config_path: &Path, force: bool, use_color: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite it.",
            config_path.display()
        );
    }

    let config = Config::default();
    config
        .save(config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    print_success(
        &format!("Wrote default configuration to {}", config_path.display()),
        use_color,
    );
    println!("  - module list: {}", config.module_list.display());
    println!("  - catalog:     {}", config.output.display());
    println!("  - manifests:   {}/<module>/{}", config.manifest_dir.display(), config.build_file);

    Ok(())
}

// Rust guideline compliant 2026-10-19

//! End-to-end level generation.
//!
//! Stages run strictly in order: module list, versions, dependents, levels,
//! output. Nothing is written until every stage has succeeded; the sorted
//! module list and the catalog are then written together.

use crate::catalog::{
    attach_dependents, initialize_records, read_dependencies, read_versions, sort_module_names,
};
use crate::levels::{compute_levels, sort_by_level, LevelReport};
use crate::manifest::ManifestSource;
use crate::storage::{load_catalog, load_module_list, save_catalog, save_module_list};
use crate::{Config, ModuleCatalog, ModuleList, ModuleRecord, Result};
use std::path::PathBuf;
use tracing::info;

/// Inputs and outputs of a generation run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Module list document to read (and rewrite sorted).
    pub module_list: PathBuf,
    /// Catalog document to write.
    pub output: PathBuf,
    /// Marker for sibling-module references in build scripts.
    pub dependency_marker: String,
    /// Whether to write the sorted module list back to `module_list`.
    pub write_sorted_list: bool,
    /// Whether to write the catalog to `output`.
    pub write_output: bool,
}

impl From<&Config> for RunOptions {
    fn from(config: &Config) -> Self {
        Self {
            module_list: config.module_list.clone(),
            output: config.output.clone(),
            dependency_marker: config.dependency_marker.clone(),
            write_sorted_list: true,
            write_output: true,
        }
    }
}

/// Result of a run: the leveled catalog plus what the engine did.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Leveled catalog, sorted by level.
    pub catalog: ModuleCatalog,
    /// Levels, wave count and pruned relations.
    pub report: LevelReport,
}

/// Runs the full pipeline against `manifests`.
///
/// # Errors
///
/// Returns an error if:
/// - The module list cannot be read or rewritten
/// - A build script cannot be read
/// - Level computation fails (inconsistent input or a cycle)
/// - The catalog cannot be written
pub fn generate<S: ManifestSource + ?Sized>(
    options: &RunOptions,
    manifests: &S,
) -> Result<RunSummary> {
    let mut list = load_module_list(&options.module_list)?;
    sort_module_names(&mut list.modules);
    info!(modules = list.modules.len(), "loaded module name list");

    let summary = generate_from_names(&list, manifests, &options.dependency_marker)?;

    if options.write_sorted_list {
        save_module_list(&options.module_list, &list)?;
        info!(path = %options.module_list.display(), "rewrote sorted module list");
    }
    if options.write_output {
        save_catalog(&options.output, &summary.catalog)?;
        info!(path = %options.output.display(), "wrote module catalog");
    }

    Ok(summary)
}

/// Builds the leveled catalog for an in-memory module list.
///
/// # Errors
///
/// Returns an error if a build script cannot be read or level computation fails.
pub fn generate_from_names<S: ManifestSource + ?Sized>(
    list: &ModuleList,
    manifests: &S,
    marker: &str,
) -> Result<RunSummary> {
    let versions = read_versions(&list.modules, manifests)?;
    let mut records = initialize_records(&list.modules, &versions);
    info!("initialized module records and versions");

    let dependencies = read_dependencies(&list.modules, manifests, marker)?;
    attach_dependents(&mut records, &dependencies);
    info!("collected immediate dependents of each module");

    build_catalog(records)
}

/// Computes levels for fully populated records and sorts them by level.
///
/// # Errors
///
/// Returns an error if the records are inconsistent or cyclic.
pub fn build_catalog(mut records: Vec<ModuleRecord>) -> Result<RunSummary> {
    let report = compute_levels(&mut records)?;
    sort_by_level(&mut records);
    info!(max_level = report.max_level(), "generated module levels");

    Ok(RunSummary {
        catalog: ModuleCatalog::new(records),
        report,
    })
}

/// Recomputes levels for an existing catalog.
///
/// # Errors
///
/// Returns an error if the catalog is inconsistent or cyclic.
pub fn recompute(catalog: ModuleCatalog) -> Result<RunSummary> {
    build_catalog(catalog.modules)
}

/// Loads a catalog from disk and recomputes its levels.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read or recomputation fails.
pub fn recompute_file(path: &std::path::Path) -> Result<RunSummary> {
    recompute(load_catalog(path)?)
}

// Rust guideline compliant 2026-10-19

//! Strata Core Library
//!
//! This crate computes release levels for the modules of a library ecosystem:
//! - Data models (ModuleRecord, ModuleCatalog, ModuleList)
//! - Graph construction from recorded dependents, with cycle validation
//! - Wave-based longest-path level propagation
//! - Pairwise pruning of transitively redundant dependents
//! - Build manifest parsing and catalog assembly
//! - JSON storage, configuration, and the end-to-end pipeline

pub mod catalog;
pub mod config;
pub mod error;
pub mod graph;
pub mod levels;
pub mod manifest;
pub mod models;
pub mod pipeline;
pub mod prune;
pub mod storage;

pub use config::Config;
pub use error::{Error, Result, Violation};
pub use graph::DependencyGraph;
pub use levels::{compute_levels, sort_by_level, LevelEngine, LevelReport};
pub use manifest::{LocalManifests, ManifestSource, StaticManifests};
pub use models::{ModuleCatalog, ModuleList, ModuleRecord};
pub use prune::{prune_redundant, PrunedRelation, RedundancyPruner};

// Rust guideline compliant 2026-10-19

//! Core data models for Strata.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Level assigned to every module before propagation.
pub const BASE_LEVEL: u32 = 1;

/// A single module of the library ecosystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRecord {
    /// Unique module name (e.g. `module-ballerina-io`).
    pub name: String,
    /// Latest released version, empty when it could not be determined.
    #[serde(default)]
    pub version: String,
    /// Release level: 1 + the longest chain of dependencies below this module.
    #[serde(default = "default_level")]
    pub level: u32,
    /// Whether the module takes part in the release. Passed through untouched.
    #[serde(default = "default_release")]
    pub release: bool,
    /// Modules that directly and non-redundantly depend on this one.
    #[serde(default)]
    pub dependents: Vec<String>,
}

fn default_level() -> u32 {
    BASE_LEVEL
}

fn default_release() -> bool {
    true
}

impl ModuleRecord {
    /// Creates a record at the base level with no dependents.
    ///
    /// # Arguments
    ///
    /// * `name` - The module name
    /// * `version` - The module version, empty if unknown
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            level: BASE_LEVEL,
            release: default_release(),
            dependents: Vec::new(),
        }
    }

    /// Builder-style helper that appends dependents in order.
    #[must_use]
    pub fn with_dependents<I, S>(mut self, dependents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependents.extend(dependents.into_iter().map(Into::into));
        self
    }

    /// Records `dependent` unless it is already present.
    pub fn add_dependent(&mut self, dependent: &str) {
        if !self.dependents.iter().any(|d| d == dependent) {
            self.dependents.push(dependent.to_string());
        }
    }

    /// Removes the first occurrence of `dependent`.
    ///
    /// # Returns
    ///
    /// True if an entry was removed, false if it was already absent.
    pub fn remove_dependent(&mut self, dependent: &str) -> bool {
        match self.dependents.iter().position(|d| d == dependent) {
            Some(pos) => {
                self.dependents.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Drops repeated dependents, keeping the first occurrence of each.
    ///
    /// # Returns
    ///
    /// The number of entries removed.
    pub fn dedup_dependents(&mut self) -> usize {
        let before = self.dependents.len();
        let mut seen = HashSet::with_capacity(before);
        self.dependents.retain(|d| seen.insert(d.clone()));
        before - self.dependents.len()
    }

}

/// Returns the segment of `name` after its last `-`, or the whole name.
pub fn short_name(name: &str) -> &str {
    name.rsplit('-').next().unwrap_or(name)
}

/// The leveled module document exchanged with loaders and writers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleCatalog {
    /// Module records, sorted by level once computed.
    pub modules: Vec<ModuleRecord>,
}

impl ModuleCatalog {
    /// Wraps an existing list of records.
    pub fn new(modules: Vec<ModuleRecord>) -> Self {
        Self { modules }
    }

    /// Finds a record by name.
    pub fn find(&self, name: &str) -> Option<&ModuleRecord> {
        self.modules.iter().find(|m| m.name == name)
    }

    /// Returns true if the catalog holds no modules.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Number of modules in the catalog.
    pub fn len(&self) -> usize {
        self.modules.len()
    }
}

/// Maps each record name to its position in `records`.
pub fn index_by_name(records: &[ModuleRecord]) -> HashMap<String, usize> {
    records
        .iter()
        .enumerate()
        .map(|(pos, record)| (record.name.clone(), pos))
        .collect()
}

/// The flat list of module names a run starts from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleList {
    /// Module names.
    pub modules: Vec<String>,
}

// Rust guideline compliant 2026-10-19

//! Assembly of module records from a name list and manifest data.

use crate::manifest::{parse_dependencies, parse_version, ManifestSource};
use crate::models::{index_by_name, short_name};
use crate::{ModuleRecord, Result};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Sorts module names by their short name (the segment after the last `-`).
///
/// The sort is stable, so names sharing a short name keep their order.
pub fn sort_module_names(names: &mut [String]) {
    names.sort_by(|a, b| short_name(a).cmp(short_name(b)));
}

/// Creates one record per name at the base level, marked for release.
///
/// Versions missing from `versions` are recorded as empty strings.
pub fn initialize_records(
    names: &[String],
    versions: &HashMap<String, String>,
) -> Vec<ModuleRecord> {
    names
        .iter()
        .map(|name| {
            let version = versions.get(name).cloned().unwrap_or_default();
            ModuleRecord::new(name.clone(), version)
        })
        .collect()
}

/// Fills in `dependents` from each module's declared dependencies.
///
/// For every module `M` in record order, `M` is appended to the dependents
/// of each record it declares as a dependency. Declared dependencies outside
/// the record set are external libraries and are ignored.
pub fn attach_dependents(
    records: &mut [ModuleRecord],
    dependencies_of: &HashMap<String, Vec<String>>,
) {
    let index = index_by_name(records);
    let names: Vec<String> = records.iter().map(|r| r.name.clone()).collect();

    for module in &names {
        let Some(dependencies) = dependencies_of.get(module) else {
            continue;
        };
        for dependency in dependencies {
            match index.get(dependency) {
                Some(&pos) => records[pos].add_dependent(module),
                None => debug!(
                    module = %module,
                    dependency = %dependency,
                    "ignoring external dependency"
                ),
            }
        }
    }
}

/// Reads the version of every module from `source`.
///
/// A module without a version is logged and recorded with an empty string.
///
/// # Errors
///
/// Returns an error if a properties file exists but cannot be read.
pub fn read_versions<S: ManifestSource + ?Sized>(
    names: &[String],
    source: &S,
) -> Result<HashMap<String, String>> {
    let mut versions = HashMap::with_capacity(names.len());
    for name in names {
        let version = source
            .properties(name)?
            .as_deref()
            .and_then(parse_version)
            .unwrap_or_else(|| {
                warn!(module = %name, "version not defined");
                String::new()
            });
        versions.insert(name.clone(), version);
    }
    Ok(versions)
}

/// Reads the declared sibling dependencies of every module from `source`.
///
/// # Errors
///
/// Returns an error if a build script cannot be read.
pub fn read_dependencies<S: ManifestSource + ?Sized>(
    names: &[String],
    source: &S,
    marker: &str,
) -> Result<HashMap<String, Vec<String>>> {
    let mut dependencies = HashMap::with_capacity(names.len());
    for name in names {
        let script = source.build_script(name)?;
        dependencies.insert(name.clone(), parse_dependencies(name, &script, marker));
    }
    Ok(dependencies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::StaticManifests;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sort_by_short_name() {
        let mut list = names(&[
            "module-ballerina-time",
            "module-ballerinax-java.jdbc",
            "module-ballerina-io",
            "module-ballerina-http",
        ]);
        sort_module_names(&mut list);
        assert_eq!(
            list,
            names(&[
                "module-ballerina-http",
                "module-ballerina-io",
                "module-ballerinax-java.jdbc",
                "module-ballerina-time",
            ])
        );
    }

    #[test]
    fn test_attach_dependents_inverts_dependencies() {
        let list = names(&["io", "time", "http"]);
        let mut records = initialize_records(&list, &HashMap::new());
        let mut deps = HashMap::new();
        deps.insert("http".to_string(), names(&["io", "time", "log"]));
        deps.insert("time".to_string(), names(&["io"]));

        attach_dependents(&mut records, &deps);

        assert_eq!(records[0].dependents, vec!["time", "http"]);
        assert_eq!(records[1].dependents, vec!["http"]);
        assert!(records[2].dependents.is_empty());
    }

    #[test]
    fn test_read_versions_defaults_to_empty() {
        let source = StaticManifests::new()
            .with_module("a", "", Some("version=1.0.0\n"))
            .with_module("b", "", None);
        let versions = read_versions(&names(&["a", "b"]), &source).unwrap();
        assert_eq!(versions["a"], "1.0.0");
        assert_eq!(versions["b"], "");
    }

    #[test]
    fn test_read_dependencies_requires_build_script() {
        let source = StaticManifests::new();
        assert!(read_dependencies(&names(&["a"]), &source, "marker").is_err());
    }
}

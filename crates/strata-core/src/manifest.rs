// Rust guideline compliant 2026-10-19

//! Build manifest parsing.
//!
//! Each module repository carries a build script that references sibling
//! modules by repository URL, and a properties file holding its version.
//! Only the text is parsed here; where the files come from is up to a
//! [`ManifestSource`].

use crate::Result;
use std::collections::HashMap;
use std::path::PathBuf;

/// Marker that identifies a sibling-module reference in a build script.
pub const DEFAULT_DEPENDENCY_MARKER: &str = "ballerina-platform/module";

/// Extracts the sibling modules `module` declares in its build script.
///
/// Every line containing `marker` contributes the text after its last `/`,
/// with trailing whitespace, quotes and closing parentheses removed. Empty
/// names and references to `module` itself are skipped. Order follows the
/// script and repeated references are kept once.
pub fn parse_dependencies(module: &str, build_script: &str, marker: &str) -> Vec<String> {
    let mut dependencies: Vec<String> = Vec::new();

    for line in build_script.lines().filter(|line| line.contains(marker)) {
        let tail = line.rsplit('/').next().unwrap_or(line);
        let name = tail.trim_end_matches(|c: char| {
            c.is_whitespace() || matches!(c, '"' | '\'' | ')' | ',' | ';')
        });

        if name.is_empty() || name == module {
            continue;
        }
        if !dependencies.iter().any(|d| d == name) {
            dependencies.push(name.to_string());
        }
    }

    dependencies
}

/// Extracts the module version from a properties file.
///
/// The last line starting with `version=` wins. Returns `None` when no such
/// line exists or its value is empty.
pub fn parse_version(properties: &str) -> Option<String> {
    properties
        .lines()
        .filter(|line| line.starts_with("version="))
        .filter_map(|line| line.rsplit('=').next())
        .map(str::trim)
        .last()
        .filter(|version| !version.is_empty())
        .map(str::to_string)
}

/// Supplies the build manifests of the modules in a run.
pub trait ManifestSource {
    /// Returns the build script text of `module`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the script cannot be read; a missing script
    /// carries `ErrorKind::NotFound`.
    fn build_script(&self, module: &str) -> Result<String>;

    /// Returns the properties file text of `module`, or `None` if it has none.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    fn properties(&self, module: &str) -> Result<Option<String>>;
}

/// Manifests checked out on disk, one directory per module.
#[derive(Debug, Clone)]
pub struct LocalManifests {
    root: PathBuf,
    build_file: String,
    properties_file: String,
}

impl LocalManifests {
    /// Creates a source reading `<root>/<module>/<build_file>` and
    /// `<root>/<module>/<properties_file>`.
    pub fn new(
        root: impl Into<PathBuf>,
        build_file: impl Into<String>,
        properties_file: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            build_file: build_file.into(),
            properties_file: properties_file.into(),
        }
    }

    fn module_file(&self, module: &str, file: &str) -> PathBuf {
        self.root.join(module).join(file)
    }
}

impl ManifestSource for LocalManifests {
    fn build_script(&self, module: &str) -> Result<String> {
        let path = self.module_file(module, &self.build_file);
        std::fs::read_to_string(&path).map_err(|e| {
            crate::Error::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", path.display(), e),
            ))
        })
    }

    fn properties(&self, module: &str) -> Result<Option<String>> {
        let path = self.module_file(module, &self.properties_file);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&path)?))
    }
}

/// In-memory manifests, keyed by module name.
#[derive(Debug, Clone, Default)]
pub struct StaticManifests {
    build_scripts: HashMap<String, String>,
    properties: HashMap<String, String>,
}

impl StaticManifests {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the build script and optional properties of `module`.
    #[must_use]
    pub fn with_module(
        mut self,
        module: &str,
        build_script: &str,
        properties: Option<&str>,
    ) -> Self {
        self.build_scripts
            .insert(module.to_string(), build_script.to_string());
        if let Some(properties) = properties {
            self.properties
                .insert(module.to_string(), properties.to_string());
        }
        self
    }
}

impl ManifestSource for StaticManifests {
    fn build_script(&self, module: &str) -> Result<String> {
        self.build_scripts.get(module).cloned().ok_or_else(|| {
            crate::Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("No build script registered for {}", module),
            ))
        })
    }

    fn properties(&self, module: &str) -> Result<Option<String>> {
        Ok(self.properties.get(module).cloned())
    }
}

// Rust guideline compliant 2026-10-19

//! Configuration management for Strata.

use crate::manifest::DEFAULT_DEPENDENCY_MARKER;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "strata.toml";

/// Configuration for a Strata run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Module list document (`{"modules": [names]}`).
    #[serde(default = "default_module_list")]
    pub module_list: PathBuf,

    /// Leveled module catalog written by `generate`.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Directory holding one checkout per module.
    #[serde(default = "default_manifest_dir")]
    pub manifest_dir: PathBuf,

    /// Build script file name inside each module checkout.
    #[serde(default = "default_build_file")]
    pub build_file: String,

    /// Properties file name inside each module checkout.
    #[serde(default = "default_properties_file")]
    pub properties_file: String,

    /// Substring marking a sibling-module reference in a build script.
    #[serde(default = "default_dependency_marker")]
    pub dependency_marker: String,
}

fn default_module_list() -> PathBuf {
    PathBuf::from("release/resources/module_list.json")
}

fn default_output() -> PathBuf {
    PathBuf::from("release/resources/stdlib_modules.json")
}

fn default_manifest_dir() -> PathBuf {
    PathBuf::from("modules")
}

fn default_build_file() -> String {
    "build.gradle".to_string()
}

fn default_properties_file() -> String {
    "gradle.properties".to_string()
}

fn default_dependency_marker() -> String {
    DEFAULT_DEPENDENCY_MARKER.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            module_list: default_module_list(),
            output: default_output(),
            manifest_dir: default_manifest_dir(),
            build_file: default_build_file(),
            properties_file: default_properties_file(),
            dependency_marker: default_dependency_marker(),
        }
    }
}

impl Config {
    /// Loads configuration from a file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. The TOML file at `path`, if it exists
    /// 3. Environment variables with `STRATA_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::default();

        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `STRATA_MODULE_LIST` - Module list document path
    /// - `STRATA_OUTPUT` - Catalog output path
    /// - `STRATA_MANIFEST_DIR` - Module checkout directory
    /// - `STRATA_BUILD_FILE` - Build script file name
    /// - `STRATA_PROPERTIES_FILE` - Properties file name
    /// - `STRATA_DEPENDENCY_MARKER` - Sibling-module marker
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("STRATA_MODULE_LIST") {
            self.module_list = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("STRATA_OUTPUT") {
            self.output = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("STRATA_MANIFEST_DIR") {
            self.manifest_dir = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("STRATA_BUILD_FILE") {
            self.build_file = val;
        }

        if let Ok(val) = std::env::var("STRATA_PROPERTIES_FILE") {
            self.properties_file = val;
        }

        if let Ok(val) = std::env::var("STRATA_DEPENDENCY_MARKER") {
            self.dependency_marker = val;
        }
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if a path or file name is empty.
    fn validate(&self) -> Result<()> {
        let paths = [
            ("module_list", &self.module_list),
            ("output", &self.output),
            ("manifest_dir", &self.manifest_dir),
        ];
        for (field, path) in paths {
            if path.as_os_str().is_empty() {
                return Err(Error::InvalidConfig(format!("{} cannot be empty", field)));
            }
        }

        let names = [
            ("build_file", &self.build_file),
            ("properties_file", &self.properties_file),
            ("dependency_marker", &self.dependency_marker),
        ];
        for (field, value) in names {
            if value.trim().is_empty() {
                return Err(Error::InvalidConfig(format!("{} cannot be empty", field)));
            }
        }

        Ok(())
    }

    /// Saves the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

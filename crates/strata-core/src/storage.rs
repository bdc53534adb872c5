// Rust guideline compliant 2026-10-19

//! Storage module for the JSON documents exchanged with loaders and writers.
//!
//! Two documents are handled: the module list (`{"modules": [names]}`) and
//! the leveled module catalog (`{"modules": [records]}`). Both are written
//! pretty-printed with four-space indentation and replaced atomically.

use crate::{Error, ModuleCatalog, ModuleList, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// File-backed storage for a single JSON document.
#[derive(Debug, Clone)]
pub struct JsonDocument {
    /// Path to the JSON file.
    path: PathBuf,
}

impl JsonDocument {
    /// Creates a new document handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(Self { path })
    }

    /// Returns true if the document exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reads and deserializes the document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened
    /// - The file is not valid JSON for `T`
    pub fn load<T: DeserializeOwned>(&self) -> Result<T> {
        use std::fs::File;
        use std::io::BufReader;

        let file = File::open(&self.path).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", self.path.display(), e),
            ))
        })?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Serializes `value` and replaces the document.
    ///
    /// Writes to a temp file in the same directory and renames it over the
    /// target, so readers never observe a half-written document. The temp
    /// file is removed again if any step fails.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, the write, or the rename fails.
    pub fn save<T: Serialize>(&self, value: &T) -> Result<()> {
        use std::fs::File;
        use std::io::Write;

        let mut content = to_pretty_json(value)?;
        content.push(b'\n');
        let temp_path = self.path.with_extension("json.tmp");

        let written = File::create(&temp_path)
            .and_then(|mut file| {
                file.write_all(&content)?;
                file.sync_all()
            })
            .and_then(|()| std::fs::rename(&temp_path, &self.path));

        if let Err(e) = written {
            // the temp file may or may not exist at this point
            let _ = std::fs::remove_file(&temp_path);
            return Err(Error::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write {}: {}", self.path.display(), e),
            )));
        }
        Ok(())
    }
}

/// Serializes `value` as JSON indented with four spaces.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Loads a module list document.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_module_list(path: &Path) -> Result<ModuleList> {
    JsonDocument::new(path)?.load()
}

/// Saves a module list document.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_module_list(path: &Path, list: &ModuleList) -> Result<()> {
    JsonDocument::new(path)?.save(list)
}

/// Loads a module catalog document.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_catalog(path: &Path) -> Result<ModuleCatalog> {
    JsonDocument::new(path)?.load()
}

/// Saves a module catalog document.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_catalog(path: &Path, catalog: &ModuleCatalog) -> Result<()> {
    JsonDocument::new(path)?.save(catalog)
}

// Rust guideline compliant 2026-10-19

//! Error types for the Strata core library.

use thiserror::Error;

/// Result type alias for Strata operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Structural invariants of the dependency graph that can be violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The graph contains a cycle through the named pair.
    Cycle,
    /// No path exists between a pair joined by a direct edge.
    MissingPath,
    /// Level propagation did not settle within the node count.
    NoConvergence,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::Cycle => f.write_str("dependency cycle"),
            Violation::MissingPath => f.write_str("no path between directly related modules"),
            Violation::NoConvergence => f.write_str("level propagation did not converge"),
        }
    }
}

/// Error types for Strata operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A recorded dependent is not part of this run's module set.
    #[error("Inconsistent input: {module} lists unknown dependent {dependent}")]
    InputInconsistency {
        /// Module whose dependents were being read.
        module: String,
        /// The dependent name absent from the module set.
        dependent: String,
    },

    /// The same module name appears more than once.
    #[error("Duplicate module: {0}")]
    DuplicateModule(String),

    /// The dependency graph broke one of its structural invariants.
    #[error("Graph invariant violated ({kind}) between {source_module} and {destination}")]
    GraphInvariantViolation {
        /// Which invariant was broken.
        kind: Violation,
        /// First module of the offending pair.
        source_module: String,
        /// Second module of the offending pair.
        destination: String,
    },

    /// Module not found in the current run.
    #[error("Module not found: {0}")]
    NotFound(String),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Builds a [`Error::GraphInvariantViolation`] for the given pair.
    pub fn violation(kind: Violation, source: &str, destination: &str) -> Self {
        Error::GraphInvariantViolation {
            kind,
            source_module: source.to_string(),
            destination: destination.to_string(),
        }
    }
}

//! Error types for coachboard-core
//!
//! The list-view engine itself never fails: malformed record attributes are
//! contained inside the affected predicate and empty views render as defined
//! empty states. `CoreError` covers the edges that do fail - config files,
//! exports, unknown CLI input.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for coachboard operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // IO Errors
    // ===================
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ===================
    // Parse Errors
    // ===================
    #[error("Failed to parse JSON in {path}: {message}")]
    JsonParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    // ===================
    // Domain Errors
    // ===================
    #[error("Unknown record domain: {name}")]
    UnknownDomain { name: String },

    #[error("Unknown route: {path}")]
    UnknownRoute { path: String },

    #[error("Unknown filter dimension: {dimension}")]
    UnknownDimension { dimension: String },

    // ===================
    // Config Errors
    // ===================
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Config directory not found")]
    ConfigDirNotFound,
}

impl CoreError {
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    pub fn unknown_domain(name: impl Into<String>) -> Self {
        Self::UnknownDomain { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::UnknownDomain {
            name: "invoices".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown record domain: invoices");

        let err = CoreError::UnknownRoute {
            path: "/nowhere".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown route: /nowhere");
    }
}

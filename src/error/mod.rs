// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the cg application.
//!
//! This module defines all error types used throughout the application,
//! with proper error categorization and context propagation.
//!
//! Rule violations found while linting a commit message are deliberately
//! not represented here: they are collected in a
//! [`ValidationResult`](crate::rules::ValidationResult) so a single run can
//! report every problem at once.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cg operations.
#[derive(Error, Debug)]
pub enum CgError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Commit message errors
    #[error("Commit error: {0}")]
    Commit(#[from] CommitError),

    // Release policy errors
    #[error("Release error: {0}")]
    Release(#[from] ReleaseError),

    // Validation outcome (used for exit status, not for individual rules)
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Commit-message input errors.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Empty commit message")]
    EmptyMessage,

    #[error("Failed to read commit message from {source_name}: {message}")]
    ReadFailed {
        source_name: String,
        message: String,
    },
}

/// Release-policy errors.
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Invalid semantic version '{value}': {message}")]
    InvalidVersion { value: String, message: String },

    #[error("Failed to render template '{name}': {message}")]
    Template { name: String, message: String },
}

/// Validation-outcome errors, raised after results were printed.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Multiple validation errors: {count} issues found")]
    MultipleErrors { count: usize },
}

/// Result type alias for cg operations.
pub type Result<T> = std::result::Result<T, CgError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CgError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/config"),
        };
        assert!(err.to_string().contains("/path/to/config"));
    }

    #[test]
    fn test_release_error_display() {
        let err = ReleaseError::InvalidVersion {
            value: "1.2".to_string(),
            message: "missing patch component".to_string(),
        };
        assert!(err.to_string().contains("1.2"));
    }

    #[test]
    fn test_cg_error_from_config_error() {
        let config_err = ConfigError::ParseError {
            message: "bad toml".to_string(),
        };
        let cg_err: CgError = config_err.into();
        assert!(cg_err.to_string().contains("bad toml"));
    }

    #[test]
    fn test_result_ext_context() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing file",
        ));
        let err = res.context("reading input").unwrap_err();
        assert!(err.to_string().contains("reading input"));
        assert!(err.to_string().contains("missing file"));
    }
}

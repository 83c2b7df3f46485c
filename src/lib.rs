// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CG - Conventional Commit Gate
//!
//! A production-grade CLI tool for linting commit messages and computing
//! release decisions.
//!
//! # Features
//!
//! - **Commit Validator**: Configurable rule engine that collects every
//!   violation in a message at once
//! - **Release Policy Engine**: Maps commit batches to a semantic-version
//!   bump and ordered changelog sections
//! - **Release Notes**: Markdown rendering with commit, compare and issue
//!   links driven by configurable templates
//!
//! # Example
//!
//! ```no_run
//! use cg::config::CgConfig;
//! use cg::rules::RuleEngine;
//!
//! // Load configuration
//! let config = CgConfig::load().unwrap();
//!
//! // Validate a commit message
//! let engine = RuleEngine::new(config);
//! let result = engine.validate_str("feat(orders): add delivery eta endpoint");
//! assert!(result.is_valid());
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod release;
pub mod rules;

// Re-exports for convenience
pub use config::CgConfig;
pub use error::{CgError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of cg.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}

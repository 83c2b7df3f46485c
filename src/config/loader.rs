// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{CgError, ConfigError, Result};
use std::path::{Path, PathBuf};

use super::schema::CgConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["cg.toml", ".cg.toml", ".config/cg.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        // Try parent directory
        if !current.pop() {
            break;
        }
    }

    // Also check user's home directory
    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        // Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let cg_config = config_dir.join("cg").join("config.toml");
            if cg_config.exists() {
                return Some(cg_config);
            }
        }
    }

    None
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<CgConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(CgConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<CgConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(CgError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        CgError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<CgConfig> {
    toml::from_str(content).map_err(|e| {
        CgError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Severity;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config.lint.header_max_length, 72);
        assert!(!config.release.rules.is_empty());
    }

    #[test]
    fn test_parse_custom_config() {
        let toml = r#"
[lint]
header_max_length = 50
types = ["feat", "fix"]
scopes = []
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.lint.header_max_length, 50);
        assert_eq!(config.lint.types, vec!["feat", "fix"]);
        assert!(config.lint.allows_scope("anything"));
    }

    #[test]
    fn test_parse_severity_overrides() {
        let toml = r#"
[lint.severity]
"subject-case" = "warning"
"body-max-line-length" = "off"
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.lint.severity_for("subject-case"), Severity::Warning);
        assert_eq!(
            config.lint.severity_for("body-max-line-length"),
            Severity::Off
        );
        assert_eq!(config.lint.severity_for("type-enum"), Severity::Error);
    }

    #[test]
    fn test_parse_release_rules() {
        let toml = r#"
[[release.rules]]
type = "feat"
release = "minor"

[[release.types]]
type = "feat"
section = "Features"
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.release.rules.len(), 1);
        assert_eq!(config.release.types.len(), 1);
        assert_eq!(config.release.types[0].section, "Features");
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cg.toml");
        std::fs::write(&path, "[lint]\nheader_max_length = 60\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.lint.header_max_length, 60);
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.toml");
        assert!(load_config_from(&path).is_err());
    }

    #[test]
    fn test_find_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cg.toml"), "").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert_eq!(found, dir.path().join("cg.toml"));
    }
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from cg.toml.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The main configuration structure for cg.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CgConfig {
    /// Lint rule configuration.
    pub lint: LintConfig,

    /// Release policy configuration.
    pub release: ReleaseConfig,
}

impl CgConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Lint rule configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Permitted commit types (empty means all allowed).
    pub types: Vec<String>,

    /// Permitted scopes (empty means all allowed). Matching is
    /// case-sensitive and flat, a scope either is in this list or it fails.
    pub scopes: Vec<String>,

    /// Maximum header length, counted in characters.
    pub header_max_length: usize,

    /// Maximum length of each body line, counted in characters.
    pub body_max_line_length: usize,

    /// Maximum length of each footer line, counted in characters.
    pub footer_max_line_length: usize,

    /// Per-rule severity overrides, keyed by rule code.
    /// Rules not listed here run at [`Severity::Error`].
    #[serde(default)]
    pub severity: HashMap<String, Severity>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            types: vec![
                "feat".to_string(),
                "fix".to_string(),
                "docs".to_string(),
                "style".to_string(),
                "refactor".to_string(),
                "perf".to_string(),
                "test".to_string(),
                "build".to_string(),
                "ci".to_string(),
                "chore".to_string(),
                "revert".to_string(),
                "breaking".to_string(),
            ],
            scopes: vec![
                "orders".to_string(),
                "catalogs".to_string(),
                "customers".to_string(),
                "payments".to_string(),
                "delivery".to_string(),
                "auth".to_string(),
                "api".to_string(),
                "core".to_string(),
                "infrastructure".to_string(),
                "testing".to_string(),
                "docs".to_string(),
                "ci".to_string(),
                "docker".to_string(),
                "k8s".to_string(),
                "go-food-delivery".to_string(),
            ],
            header_max_length: 72,
            body_max_line_length: 100,
            footer_max_line_length: 100,
            severity: HashMap::new(),
        }
    }
}

impl LintConfig {
    /// Get the effective severity for a rule code.
    pub fn severity_for(&self, code: &str) -> Severity {
        self.severity.get(code).copied().unwrap_or(Severity::Error)
    }

    /// Check a commit type against the configured type enum.
    pub fn allows_type(&self, commit_type: &str) -> bool {
        self.types.is_empty() || self.types.iter().any(|t| t == commit_type)
    }

    /// Check a scope against the configured scope enum.
    pub fn allows_scope(&self, scope: &str) -> bool {
        self.scopes.is_empty() || self.scopes.iter().any(|s| s == scope)
    }
}

/// Severity at which a rule runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Violations fail validation.
    Error,
    /// Violations are reported but do not fail validation.
    Warning,
    /// The rule does not run.
    Off,
}

/// Release policy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
    /// Prefixes that mark an issue reference inside a commit subject.
    pub issue_prefixes: Vec<String>,

    /// Handlebars template for a commit link, given `{{hash}}`.
    /// Empty disables commit links in rendered notes.
    pub commit_url_format: String,

    /// Handlebars template for a compare link, given `{{previousTag}}`
    /// and `{{currentTag}}`. Empty disables the compare link.
    pub compare_url_format: String,

    /// Handlebars template for an issue link, given `{{id}}`.
    /// Empty disables issue linkification.
    pub issue_url_format: String,

    /// Handlebars template for the release commit message, given
    /// `{{currentTag}}`.
    pub release_commit_message_format: String,

    /// Markdown prelude for a freshly created changelog.
    pub changelog_title: String,

    /// Changelog section per commit type. Types missing here are omitted
    /// from release notes but still considered for the version bump.
    pub types: Vec<SectionRule>,

    /// Ordered version bump rules, first match per type wins.
    pub rules: Vec<ReleaseRule>,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            types: vec![
                SectionRule::new("feat", "🚀 Features"),
                SectionRule::new("fix", "🐛 Bug Fixes"),
                SectionRule::new("docs", "📄 Documentation"),
                SectionRule::new("style", "🎨 Style & Formatting"),
                SectionRule::new("refactor", "♻️ Enhancement"),
                SectionRule::new("perf", "⚡ Performance"),
                SectionRule::new("test", "🧪 Test"),
                SectionRule::new("build", "🧩 Dependency Updates"),
                SectionRule::new("ci", "👷 CI"),
                SectionRule::new("chore", "🧰 Maintenance"),
                SectionRule::new("revert", "⏪ Revert"),
                SectionRule::new("breaking", "⚠️ Breaking Changes"),
            ],
            rules: vec![
                ReleaseRule::new("breaking", Bump::Major),
                ReleaseRule::new("feat", Bump::Minor),
                ReleaseRule::new("fix", Bump::Patch),
                ReleaseRule::new("docs", Bump::Patch),
                ReleaseRule::new("style", Bump::Patch),
                ReleaseRule::new("refactor", Bump::Patch),
                ReleaseRule::new("perf", Bump::Patch),
                ReleaseRule::new("test", Bump::Patch),
            ],
            issue_prefixes: vec![
                "#".to_string(),
                "GH-".to_string(),
                "Fixes #".to_string(),
                "Closes #".to_string(),
            ],
            commit_url_format: String::new(),
            compare_url_format: String::new(),
            issue_url_format: String::new(),
            release_commit_message_format: "chore(release): 📦 {{currentTag}}".to_string(),
            changelog_title: "# 📋 Changelog\n\nAll notable changes to this project will be \
                              documented in this file.\n"
                .to_string(),
        }
    }
}

/// Changelog section assignment for a commit type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionRule {
    /// Commit type this rule applies to.
    #[serde(rename = "type")]
    pub commit_type: String,

    /// Display label of the changelog section, emoji prefix included.
    pub section: String,
}

impl SectionRule {
    /// Create a new section rule.
    pub fn new(commit_type: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            commit_type: commit_type.into(),
            section: section.into(),
        }
    }
}

/// Version bump assignment for a commit type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseRule {
    /// Commit type this rule applies to.
    #[serde(rename = "type")]
    pub commit_type: String,

    /// Bump triggered by commits of this type.
    pub release: Bump,
}

impl ReleaseRule {
    /// Create a new release rule.
    pub fn new(commit_type: impl Into<String>, release: Bump) -> Self {
        Self {
            commit_type: commit_type.into(),
            release,
        }
    }
}

/// Semantic-version bump severity.
///
/// Ordering follows bump severity: `None < Patch < Minor < Major`, so the
/// aggregate bump of a commit batch is the plain maximum.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Bump {
    /// No release needed.
    #[default]
    None,
    Patch,
    Minor,
    Major,
}

impl Bump {
    /// Get the string representation of the bump.
    pub fn as_str(&self) -> &'static str {
        match self {
            Bump::None => "none",
            Bump::Patch => "patch",
            Bump::Minor => "minor",
            Bump::Major => "major",
        }
    }
}

impl std::fmt::Display for Bump {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

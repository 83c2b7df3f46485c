// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::CgConfig;

/// Get the default configuration.
pub fn default_config() -> CgConfig {
    CgConfig::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r##"# CG Configuration File
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

# Lint rule configuration
[lint]
types = ["feat", "fix", "docs", "style", "refactor", "perf", "test", "build", "ci", "chore", "revert", "breaking"]
scopes = [
    # Services
    "orders", "catalogs", "customers", "payments", "delivery", "auth",
    # Technical layers
    "api", "core", "infrastructure", "testing",
    # Documentation and tools
    "docs", "ci", "docker", "k8s",
    # General
    "go-food-delivery",
]
header_max_length = 72
body_max_line_length = 100
footer_max_line_length = 100

# Per-rule severity overrides: "error", "warning" or "off".
# Every rule runs at "error" unless listed here.
[lint.severity]
# "subject-case" = "warning"
# "body-max-line-length" = "off"

# Release policy configuration
[release]
issue_prefixes = ["#", "GH-", "Fixes #", "Closes #"]
commit_url_format = "https://github.com/acme/food-delivery/commit/{{hash}}"
compare_url_format = "https://github.com/acme/food-delivery/compare/{{previousTag}}...{{currentTag}}"
issue_url_format = "https://github.com/acme/food-delivery/issues/{{id}}"
release_commit_message_format = "chore(release): 📦 {{currentTag}}"

# Changelog section per commit type
[[release.types]]
type = "feat"
section = "🚀 Features"

[[release.types]]
type = "fix"
section = "🐛 Bug Fixes"

[[release.types]]
type = "docs"
section = "📄 Documentation"

[[release.types]]
type = "style"
section = "🎨 Style & Formatting"

[[release.types]]
type = "refactor"
section = "♻️ Enhancement"

[[release.types]]
type = "perf"
section = "⚡ Performance"

[[release.types]]
type = "test"
section = "🧪 Test"

[[release.types]]
type = "build"
section = "🧩 Dependency Updates"

[[release.types]]
type = "ci"
section = "👷 CI"

[[release.types]]
type = "chore"
section = "🧰 Maintenance"

[[release.types]]
type = "revert"
section = "⏪ Revert"

[[release.types]]
type = "breaking"
section = "⚠️ Breaking Changes"

# Version bump rules, first match per type wins
[[release.rules]]
type = "breaking"
release = "major"

[[release.rules]]
type = "feat"
release = "minor"

[[release.rules]]
type = "fix"
release = "patch"

[[release.rules]]
type = "docs"
release = "patch"

[[release.rules]]
type = "style"
release = "patch"

[[release.rules]]
type = "refactor"
release = "patch"

[[release.rules]]
type = "perf"
release = "patch"

[[release.rules]]
type = "test"
release = "patch"
"##
}

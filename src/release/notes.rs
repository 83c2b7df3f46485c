// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Release notes rendering.
//!
//! Turns a [`ReleaseDecision`] into the markdown an external changelog
//! writer would persist. Links are driven by the handlebars templates in
//! the release configuration; an empty template disables its links.

use handlebars::Handlebars;
use regex::Regex;
use serde_json::json;

use crate::config::ReleaseConfig;
use crate::error::{ReleaseError, Result};

use super::policy::ReleaseDecision;

const COMMIT_URL: &str = "commit-url";
const COMPARE_URL: &str = "compare-url";
const ISSUE_URL: &str = "issue-url";
const RELEASE_COMMIT: &str = "release-commit";

/// Markdown renderer for release notes.
#[derive(Debug)]
pub struct NotesRenderer {
    handlebars: Handlebars<'static>,
    config: ReleaseConfig,
}

impl NotesRenderer {
    /// Create a renderer, registering the configured templates.
    pub fn new(config: ReleaseConfig) -> Result<Self> {
        let mut handlebars = Handlebars::new();
        // Output is markdown, not HTML.
        handlebars.register_escape_fn(handlebars::no_escape);

        let templates = [
            (COMMIT_URL, &config.commit_url_format),
            (COMPARE_URL, &config.compare_url_format),
            (ISSUE_URL, &config.issue_url_format),
            (RELEASE_COMMIT, &config.release_commit_message_format),
        ];
        for (name, template) in templates {
            if !template.is_empty() {
                handlebars
                    .register_template_string(name, template)
                    .map_err(|e| ReleaseError::Template {
                        name: name.to_string(),
                        message: e.to_string(),
                    })?;
            }
        }

        Ok(Self { handlebars, config })
    }

    /// Render markdown notes for a decision.
    ///
    /// `version` is the version being released (absent renders an
    /// "Unreleased" heading); `previous_tag` enables the compare link.
    pub fn render(
        &self,
        decision: &ReleaseDecision,
        version: Option<&semver::Version>,
        previous_tag: Option<&str>,
        date: chrono::NaiveDate,
    ) -> Result<String> {
        let label = version
            .map(|v| v.to_string())
            .unwrap_or_else(|| "Unreleased".to_string());

        let mut out = String::new();
        let heading = match (version, previous_tag) {
            (Some(version), Some(previous)) if self.handlebars.get_template(COMPARE_URL).is_some() => {
                let url = self
                    .render_template(
                        COMPARE_URL,
                        &json!({
                            "previousTag": previous,
                            "currentTag": format!("v{}", version),
                        }),
                    )?;
                format!("## [{}]({})", label, url)
            }
            _ => format!("## {}", label),
        };
        out.push_str(&heading);
        out.push_str(&format!(" ({})\n", date.format("%Y-%m-%d")));

        for section in &decision.sections {
            out.push_str(&format!("\n### {}\n\n", section.title));
            for entry in &section.entries {
                out.push_str("- ");
                if let Some(ref scope) = entry.scope {
                    out.push_str(&format!("**{}:** ", scope));
                }
                out.push_str(&self.linkify_issues(&entry.subject)?);
                if let Some(ref hash) = entry.hash {
                    if self.handlebars.get_template(COMMIT_URL).is_some() {
                        let url = self.render_template(COMMIT_URL, &json!({ "hash": hash }))?;
                        let short = &hash[..7.min(hash.len())];
                        out.push_str(&format!(" ([`{}`]({}))", short, url));
                    }
                }
                out.push('\n');
            }
        }

        Ok(out)
    }

    /// Render the release commit message for a tag.
    pub fn release_commit_message(&self, tag: &str) -> Result<String> {
        if self.handlebars.get_template(RELEASE_COMMIT).is_none() {
            return Ok(String::new());
        }
        self.render_template(RELEASE_COMMIT, &json!({ "currentTag": tag }))
    }

    /// Replace configured issue references with markdown links.
    fn linkify_issues(&self, text: &str) -> Result<String> {
        if self.handlebars.get_template(ISSUE_URL).is_none() || self.config.issue_prefixes.is_empty() {
            return Ok(text.to_string());
        }

        // Longest prefix first, so "Fixes #42" wins over the bare "#42".
        let mut prefixes: Vec<&String> = self.config.issue_prefixes.iter().collect();
        prefixes.sort_by_key(|p| std::cmp::Reverse(p.len()));
        let pattern = prefixes
            .iter()
            .map(|p| regex::escape(p))
            .collect::<Vec<_>>()
            .join("|");
        let re = Regex::new(&format!(r"(?:{})(\d+)", pattern)).map_err(|e| {
            ReleaseError::Template {
                name: ISSUE_URL.to_string(),
                message: e.to_string(),
            }
        })?;

        let mut out = String::new();
        let mut last = 0;
        for captures in re.captures_iter(text) {
            let Some(whole) = captures.get(0) else {
                continue;
            };
            let url = self.render_template(ISSUE_URL, &json!({ "id": &captures[1] }))?;
            out.push_str(&text[last..whole.start()]);
            out.push_str(&format!("[{}]({})", whole.as_str(), url));
            last = whole.end();
        }
        out.push_str(&text[last..]);
        Ok(out)
    }

    fn render_template(&self, name: &str, data: &serde_json::Value) -> Result<String> {
        self.handlebars.render(name, data).map_err(|e| {
            ReleaseError::Template {
                name: name.to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }
}

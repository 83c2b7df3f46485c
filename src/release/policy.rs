// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Release policy: map classified commits to a version bump and
//! changelog sections.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::commit::CommitMessage;
use crate::config::{Bump, ReleaseConfig};

lazy_static! {
    /// `git log --oneline` style prefix: an abbreviated or full hex hash.
    static ref LOG_LINE_REGEX: Regex =
        Regex::new(r"^(?P<hash>[0-9a-f]{7,40})\s+(?P<rest>.*)$").unwrap();
}

/// A single commit as seen by the release policy.
///
/// The policy tolerates records that never went through validation: an
/// unparseable header leaves `commit_type` empty, which contributes no
/// bump and lands in no section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Commit hash, when the input carried one.
    pub hash: Option<String>,
    /// Commit type, when the header matched the conventional grammar.
    pub commit_type: Option<String>,
    /// Optional scope.
    pub scope: Option<String>,
    /// Subject text (the raw header for unconventional commits).
    pub subject: String,
    /// Whether the commit is marked breaking.
    pub is_breaking: bool,
}

impl CommitRecord {
    /// Build a record from a parsed commit message.
    pub fn from_message(message: &CommitMessage) -> Self {
        let is_breaking = message.is_breaking();
        match &message.fields {
            Some(fields) => Self {
                hash: None,
                commit_type: Some(fields.commit_type.clone()),
                scope: fields.scope.clone(),
                subject: fields.subject.clone(),
                is_breaking,
            },
            None => Self {
                hash: None,
                commit_type: None,
                scope: None,
                subject: message.header.clone(),
                is_breaking,
            },
        }
    }

    /// Parse a single log line: an optional leading hash followed by a
    /// commit header.
    pub fn parse_log_line(line: &str) -> Self {
        let line = line.trim_end();
        let (hash, header) = match LOG_LINE_REGEX.captures(line) {
            Some(captures) => (
                Some(captures["hash"].to_string()),
                captures["rest"].to_string(),
            ),
            None => (None, line.to_string()),
        };

        let mut record = Self::from_message(&CommitMessage::parse(&header));
        record.hash = hash;
        record
    }
}

/// One changelog section with its commits in input order.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    /// Display label, emoji prefix included.
    pub title: String,
    /// Commits assigned to this section.
    pub entries: Vec<SectionEntry>,
}

/// A single changelog entry.
#[derive(Debug, Clone, Serialize)]
pub struct SectionEntry {
    /// Optional scope.
    pub scope: Option<String>,
    /// Commit subject.
    pub subject: String,
    /// Commit hash, when known.
    pub hash: Option<String>,
}

/// Aggregate release decision over a commit batch.
#[derive(Debug, Clone, Serialize)]
pub struct ReleaseDecision {
    /// Maximum-severity bump across the batch; `none` means no release.
    pub bump: Bump,
    /// Non-empty changelog sections, in order of first appearance.
    pub sections: Vec<Section>,
}

/// Release policy engine.
#[derive(Debug, Clone)]
pub struct ReleasePolicy {
    config: ReleaseConfig,
}

impl ReleasePolicy {
    /// Create a new policy from configuration.
    pub fn new(config: ReleaseConfig) -> Self {
        Self { config }
    }

    /// Bump for a commit type: first matching release rule wins,
    /// no match means no bump.
    pub fn bump_for_type(&self, commit_type: &str) -> Bump {
        self.config
            .rules
            .iter()
            .find(|r| r.commit_type == commit_type)
            .map(|r| r.release)
            .unwrap_or(Bump::None)
    }

    /// Changelog section for a commit type, if one is configured.
    pub fn section_for_type(&self, commit_type: &str) -> Option<&str> {
        self.config
            .types
            .iter()
            .find(|t| t.commit_type == commit_type)
            .map(|t| t.section.as_str())
    }

    /// Bump contributed by a single commit. A breaking marker escalates
    /// to major regardless of the type's configured bump.
    pub fn classify(&self, record: &CommitRecord) -> Bump {
        if record.is_breaking {
            return Bump::Major;
        }
        match &record.commit_type {
            Some(commit_type) => self.bump_for_type(commit_type),
            None => Bump::None,
        }
    }

    /// Compute the aggregate decision for a commit batch.
    ///
    /// Sections preserve the input commit order; types sharing a section
    /// label merge in encounter order; empty sections are omitted.
    pub fn decide(&self, records: &[CommitRecord]) -> ReleaseDecision {
        let mut bump = Bump::None;
        let mut sections: Vec<Section> = Vec::new();

        for record in records {
            bump = bump.max(self.classify(record));

            let Some(commit_type) = &record.commit_type else {
                continue;
            };
            let Some(title) = self.section_for_type(commit_type) else {
                continue;
            };

            let entry = SectionEntry {
                scope: record.scope.clone(),
                subject: record.subject.clone(),
                hash: record.hash.clone(),
            };
            match sections.iter_mut().find(|s| s.title == title) {
                Some(section) => section.entries.push(entry),
                None => sections.push(Section {
                    title: title.to_string(),
                    entries: vec![entry],
                }),
            }
        }

        ReleaseDecision { bump, sections }
    }
}

/// Apply a bump to a version. `None` yields no new version, signaling
/// that no release is needed. Prerelease and build metadata are cleared.
pub fn next_version(current: &semver::Version, bump: Bump) -> Option<semver::Version> {
    let (major, minor, patch) = match bump {
        Bump::None => return None,
        Bump::Major => (current.major + 1, 0, 0),
        Bump::Minor => (current.major, current.minor + 1, 0),
        Bump::Patch => (current.major, current.minor, current.patch + 1),
    };
    Some(semver::Version::new(major, minor, patch))
}

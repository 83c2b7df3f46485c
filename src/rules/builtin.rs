// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.
//!
//! Every rule is applied on every run and all findings are accumulated, so
//! a rejected message reports everything wrong with it at once.

use crate::commit::{Block, CommitMessage};
use crate::config::{LintConfig, Severity};

use super::validator::ValidationIssue;

/// Trait for custom rules.
pub trait Rule: std::fmt::Debug + Send + Sync {
    /// Check the commit message and return an issue if validation fails.
    fn check(&self, message: &CommitMessage, config: &LintConfig) -> Option<ValidationIssue>;

    /// Get the rule name.
    fn name(&self) -> &str;
}

/// Build an issue for `code` at the configured severity, or nothing when
/// the rule is switched off.
fn issue(
    config: &LintConfig,
    code: &str,
    message: String,
    suggestion: Option<String>,
    line: Option<usize>,
) -> Option<ValidationIssue> {
    match config.severity_for(code) {
        Severity::Off => None,
        severity => Some(ValidationIssue {
            code: code.to_string(),
            message,
            suggestion,
            is_error: severity == Severity::Error,
            line,
        }),
    }
}

/// Apply all built-in rules to a commit message.
pub fn apply_builtin_rules(message: &CommitMessage, config: &LintConfig) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    // Header grammar
    if let Some(i) = check_header_parse(message, config) {
        issues.push(i);
    }

    // Type and scope enums
    if let Some(i) = check_type_enum(message, config) {
        issues.push(i);
    }
    if let Some(i) = check_scope_enum(message, config) {
        issues.push(i);
    }

    // Subject rules
    if let Some(i) = check_subject_empty(message, config) {
        issues.push(i);
    }
    if let Some(i) = check_subject_case(message, config) {
        issues.push(i);
    }
    if let Some(i) = check_subject_full_stop(message, config) {
        issues.push(i);
    }

    // Header length
    if let Some(i) = check_header_max_length(message, config) {
        issues.push(i);
    }

    // Body rules
    if let Some(i) = check_leading_blank(message.body.as_ref(), "body-leading-blank", config) {
        issues.push(i);
    }
    issues.extend(check_line_lengths(
        message.body.as_ref(),
        "body-max-line-length",
        config.body_max_line_length,
        config,
    ));

    // Footer rules
    if let Some(i) = check_leading_blank(message.footer.as_ref(), "footer-leading-blank", config) {
        issues.push(i);
    }
    issues.extend(check_line_lengths(
        message.footer.as_ref(),
        "footer-max-line-length",
        config.footer_max_line_length,
        config,
    ));

    issues
}

/// Check that the header matches `type(scope): subject`.
fn check_header_parse(message: &CommitMessage, config: &LintConfig) -> Option<ValidationIssue> {
    if message.fields.is_some() {
        return None;
    }
    issue(
        config,
        "header-parse",
        format!("Header does not match 'type(scope): subject': '{}'", message.header),
        Some("Write the header as type(scope): subject, e.g. feat(orders): add eta".to_string()),
        Some(1),
    )
}

/// Check the commit type against the configured type enum.
fn check_type_enum(message: &CommitMessage, config: &LintConfig) -> Option<ValidationIssue> {
    let fields = message.fields.as_ref()?;

    if config.allows_type(&fields.commit_type) {
        return None;
    }
    issue(
        config,
        "type-enum",
        format!("Commit type '{}' is not allowed", fields.commit_type),
        Some(format!("Use one of: {}", config.types.join(", "))),
        Some(1),
    )
}

/// Check the scope, when present, against the configured scope enum.
/// An absent scope is never an error.
fn check_scope_enum(message: &CommitMessage, config: &LintConfig) -> Option<ValidationIssue> {
    let fields = message.fields.as_ref()?;
    let scope = fields.scope.as_ref()?;

    if config.allows_scope(scope) {
        return None;
    }
    issue(
        config,
        "scope-enum",
        format!("Scope '{}' is not allowed", scope),
        Some(format!("Use one of: {}", config.scopes.join(", "))),
        Some(1),
    )
}

/// Check that the subject is non-empty.
fn check_subject_empty(message: &CommitMessage, config: &LintConfig) -> Option<ValidationIssue> {
    let fields = message.fields.as_ref()?;

    if !fields.subject.trim().is_empty() {
        return None;
    }
    issue(
        config,
        "subject-empty",
        "Subject must not be empty".to_string(),
        Some("Describe the change after the colon".to_string()),
        Some(1),
    )
}

/// Check that the subject is lower-case.
fn check_subject_case(message: &CommitMessage, config: &LintConfig) -> Option<ValidationIssue> {
    let fields = message.fields.as_ref()?;

    if !fields.subject.chars().any(char::is_uppercase) {
        return None;
    }
    issue(
        config,
        "subject-case",
        format!("Subject must be lower-case: '{}'", fields.subject),
        Some("Write the subject entirely in lower case".to_string()),
        Some(1),
    )
}

/// Check that the subject does not end with a period.
fn check_subject_full_stop(message: &CommitMessage, config: &LintConfig) -> Option<ValidationIssue> {
    let fields = message.fields.as_ref()?;

    if !fields.subject.trim_end().ends_with('.') {
        return None;
    }
    issue(
        config,
        "subject-full-stop",
        "Subject must not end with a period".to_string(),
        Some("Remove the trailing period".to_string()),
        Some(1),
    )
}

/// Check the header length against the configured limit.
fn check_header_max_length(message: &CommitMessage, config: &LintConfig) -> Option<ValidationIssue> {
    let len = message.header_len();
    let max = config.header_max_length;

    if len <= max {
        return None;
    }
    issue(
        config,
        "header-max-length",
        format!("Header is too long: {} characters (max: {})", len, max),
        Some(format!("Shorten the header to {} characters or less", max)),
        Some(1),
    )
}

/// Check that a part is preceded by exactly one blank line.
fn check_leading_blank(
    block: Option<&Block>,
    code: &str,
    config: &LintConfig,
) -> Option<ValidationIssue> {
    let block = block?;

    match block.leading_blanks {
        1 => None,
        0 => issue(
            config,
            code,
            "Missing blank line before this part".to_string(),
            Some("Separate it from the previous part with one blank line".to_string()),
            Some(block.start_line),
        ),
        n => issue(
            config,
            code,
            format!("Expected exactly one blank line before this part, found {}", n),
            Some("Use a single blank line as separator".to_string()),
            Some(block.start_line),
        ),
    }
}

/// Check every line of a part against a length limit.
fn check_line_lengths(
    block: Option<&Block>,
    code: &str,
    max: usize,
    config: &LintConfig,
) -> Vec<ValidationIssue> {
    let Some(block) = block else {
        return Vec::new();
    };

    block
        .lines
        .iter()
        .enumerate()
        .filter_map(|(offset, line)| {
            let len = line.chars().count();
            if len <= max {
                return None;
            }
            issue(
                config,
                code,
                format!("Line is too long: {} characters (max: {})", len, max),
                Some(format!("Wrap the line at {} characters", max)),
                Some(block.start_line + offset),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Severity;

    fn lint(raw: &str) -> Vec<ValidationIssue> {
        apply_builtin_rules(&CommitMessage::parse(raw), &LintConfig::default())
    }

    fn codes(issues: &[ValidationIssue]) -> Vec<&str> {
        issues.iter().map(|i| i.code.as_str()).collect()
    }

    #[test]
    fn test_clean_message_has_no_issues() {
        assert!(lint("feat(orders): add delivery eta endpoint").is_empty());
    }

    #[test]
    fn test_header_parse() {
        let issues = lint("Fix Bug In Payments.");
        assert_eq!(codes(&issues), vec!["header-parse"]);
    }

    #[test]
    fn test_type_enum() {
        let issues = lint("wip(orders): something");
        assert_eq!(codes(&issues), vec!["type-enum"]);
        assert!(issues[0].message.contains("wip"));
        assert!(issues[0].suggestion.as_ref().unwrap().contains("feat"));
    }

    #[test]
    fn test_scope_enum() {
        let issues = lint("feat(warehouse): add racks");
        assert_eq!(codes(&issues), vec!["scope-enum"]);
    }

    #[test]
    fn test_scope_absent_is_allowed() {
        assert!(lint("feat: add delivery eta endpoint").is_empty());
    }

    #[test]
    fn test_subject_rules_accumulate() {
        let issues = lint("feat(orders): Added The Endpoint.");
        assert_eq!(codes(&issues), vec!["subject-case", "subject-full-stop"]);
    }

    #[test]
    fn test_subject_empty() {
        let issues = lint("feat(orders): ");
        assert_eq!(codes(&issues), vec!["subject-empty"]);
    }

    #[test]
    fn test_header_max_length() {
        let raw = format!("feat(orders): {}", "a".repeat(80));
        let issues = lint(&raw);
        assert_eq!(codes(&issues), vec!["header-max-length"]);
        assert!(issues[0].message.contains("max: 72"));
    }

    #[test]
    fn test_body_leading_blank_missing() {
        let issues = lint("feat(orders): add eta\nbody without separator");
        assert_eq!(codes(&issues), vec!["body-leading-blank"]);
    }

    #[test]
    fn test_body_leading_blank_doubled() {
        let issues = lint("feat(orders): add eta\n\n\nbody after two blanks");
        assert_eq!(codes(&issues), vec!["body-leading-blank"]);
        assert!(issues[0].message.contains("found 2"));
    }

    #[test]
    fn test_body_line_length_reports_line_number() {
        let raw = format!("feat(orders): add eta\n\nshort line\n{}", "x".repeat(120));
        let issues = lint(&raw);
        assert_eq!(codes(&issues), vec!["body-max-line-length"]);
        assert_eq!(issues[0].line, Some(4));
    }

    #[test]
    fn test_footer_rules() {
        let raw = format!(
            "feat(orders): add eta\n\nbody\n\nFixes: {}",
            "x".repeat(120)
        );
        let issues = lint(&raw);
        assert_eq!(codes(&issues), vec!["footer-max-line-length"]);
        assert_eq!(issues[0].line, Some(5));
    }

    #[test]
    fn test_violations_accumulate_across_rules() {
        let issues = lint("wip(warehouse): Do Things.\nbody without separator");
        assert_eq!(
            codes(&issues),
            vec![
                "type-enum",
                "scope-enum",
                "subject-case",
                "subject-full-stop",
                "body-leading-blank"
            ]
        );
    }

    #[test]
    fn test_severity_off_suppresses_rule() {
        let mut config = LintConfig::default();
        config
            .severity
            .insert("subject-case".to_string(), Severity::Off);
        let message = CommitMessage::parse("feat(orders): Added endpoint");
        assert!(apply_builtin_rules(&message, &config).is_empty());
    }

    #[test]
    fn test_severity_warning_downgrades_rule() {
        let mut config = LintConfig::default();
        config
            .severity
            .insert("subject-case".to_string(), Severity::Warning);
        let message = CommitMessage::parse("feat(orders): Added endpoint");
        let issues = apply_builtin_rules(&message, &config);
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error);
    }

    #[test]
    fn test_header_parse_still_checks_structure() {
        let issues = lint("Not Conventional\nglued body");
        assert_eq!(codes(&issues), vec!["header-parse", "body-leading-blank"]);
    }
}

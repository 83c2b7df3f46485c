// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::CommitMessage;
use crate::config::CgConfig;

use super::builtin::{apply_builtin_rules, Rule};
use super::validator::ValidationResult;

/// Separator line between messages in batch input.
const BATCH_SEPARATOR: &str = "---";

/// Rule engine for validating commit messages.
#[derive(Debug)]
pub struct RuleEngine {
    config: CgConfig,
    custom_rules: Vec<Box<dyn Rule>>,
}

impl RuleEngine {
    /// Create a new rule engine with the given configuration.
    pub fn new(config: CgConfig) -> Self {
        Self {
            config,
            custom_rules: Vec::new(),
        }
    }

    /// Add a custom rule to the engine.
    pub fn add_rule(&mut self, rule: Box<dyn Rule>) {
        self.custom_rules.push(rule);
    }

    /// Validate a parsed commit message.
    pub fn validate(&self, message: &CommitMessage) -> ValidationResult {
        let mut result = ValidationResult::new(message.raw.clone());

        // Apply built-in rules
        let builtin_issues = apply_builtin_rules(message, &self.config.lint);
        for issue in builtin_issues {
            if issue.is_error {
                result.errors.push(issue);
            } else {
                result.warnings.push(issue);
            }
        }

        // Apply custom rules
        for rule in &self.custom_rules {
            if let Some(issue) = rule.check(message, &self.config.lint) {
                if issue.is_error {
                    result.errors.push(issue);
                } else {
                    result.warnings.push(issue);
                }
            }
        }

        result
    }

    /// Validate a raw commit message string.
    pub fn validate_str(&self, raw: &str) -> ValidationResult {
        self.validate(&CommitMessage::parse(raw))
    }

    /// Validate a batch of messages separated by `---` lines.
    pub fn validate_batch(&self, input: &str) -> Vec<ValidationResult> {
        let mut results = Vec::new();
        let mut current = Vec::new();

        for line in input.lines() {
            if line.trim() == BATCH_SEPARATOR {
                if !current.is_empty() {
                    results.push(self.validate_str(&current.join("\n")));
                    current.clear();
                }
            } else {
                current.push(line);
            }
        }
        if !current.iter().all(|l: &&str| l.trim().is_empty()) {
            results.push(self.validate_str(&current.join("\n")));
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_engine_validate() {
        let config = CgConfig::default();
        let engine = RuleEngine::new(config);

        let result = engine.validate_str("feat(orders): add delivery eta endpoint");
        assert!(result.is_valid());
    }

    #[test]
    fn test_rule_engine_collects_all_violations() {
        let config = CgConfig::default();
        let engine = RuleEngine::new(config);

        let result = engine.validate_str("wip(warehouse): Broke Everything.");
        assert!(!result.is_valid());
        let codes: Vec<&str> = result.errors.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(
            codes,
            vec![
                "type-enum",
                "scope-enum",
                "subject-case",
                "subject-full-stop"
            ]
        );
    }

    #[test]
    fn test_rule_engine_is_idempotent() {
        let config = CgConfig::default();
        let engine = RuleEngine::new(config);
        let raw = "feat(orders): Add Endpoint.";

        let first = engine.validate_str(raw);
        let second = engine.validate_str(raw);
        let codes = |r: &ValidationResult| {
            r.errors
                .iter()
                .map(|e| e.code.clone())
                .collect::<Vec<String>>()
        };
        assert_eq!(codes(&first), codes(&second));
    }

    #[test]
    fn test_validate_batch() {
        let config = CgConfig::default();
        let engine = RuleEngine::new(config);

        let input = "feat(orders): add eta\n---\nFix Bug.\n---\nfix(payments): retry captures";
        let results = engine.validate_batch(input);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_valid());
        assert!(!results[1].is_valid());
        assert!(results[2].is_valid());
    }

    #[test]
    fn test_validate_batch_single_message() {
        let config = CgConfig::default();
        let engine = RuleEngine::new(config);

        let results = engine.validate_batch("feat(orders): add eta\n\nbody line here");
        assert_eq!(results.len(), 1);
        assert!(results[0].is_valid());
    }

    #[test]
    fn test_custom_rule() {
        #[derive(Debug)]
        struct NoEmoji;

        impl Rule for NoEmoji {
            fn check(
                &self,
                message: &CommitMessage,
                _config: &crate::config::LintConfig,
            ) -> Option<crate::rules::ValidationIssue> {
                if message.header.chars().any(|c| c as u32 > 0x1F000) {
                    Some(crate::rules::ValidationIssue {
                        code: "no-emoji".to_string(),
                        message: "Emoji are not allowed in headers".to_string(),
                        suggestion: None,
                        is_error: true,
                        line: Some(1),
                    })
                } else {
                    None
                }
            }

            fn name(&self) -> &str {
                "no-emoji"
            }
        }

        let mut engine = RuleEngine::new(CgConfig::default());
        engine.add_rule(Box::new(NoEmoji));

        let result = engine.validate_str("feat(orders): ship it 🚀");
        assert!(!result.is_valid());
        assert_eq!(result.errors[0].code, "no-emoji");
    }
}

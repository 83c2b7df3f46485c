// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use crate::cli::args::OutputFormat;
use console::{style, Style};

/// A single validation issue.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Rule code for programmatic handling (e.g. `type-enum`).
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    pub suggestion: Option<String>,
    /// Whether this is an error (true) or warning (false).
    pub is_error: bool,
    /// Line number where the issue was found.
    pub line: Option<usize>,
}

impl ValidationIssue {
    /// Format the issue for terminal output.
    pub fn format(&self) -> String {
        let prefix = if self.is_error {
            style("✗").red().bold()
        } else {
            style("⚠").yellow().bold()
        };

        let code_style = if self.is_error {
            Style::new().red()
        } else {
            Style::new().yellow()
        };

        let mut output = format!(
            "{} {} {}",
            prefix,
            code_style.apply_to(&self.code),
            self.message
        );

        if let Some(ref suggestion) = self.suggestion {
            output.push_str(&format!(
                "\n  {} {}",
                style("→").dim(),
                style(suggestion).dim()
            ));
        }

        output
    }
}

/// Result of validating a commit message.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// The original message.
    pub message: String,
    /// Validation errors, in the order the rules ran.
    pub errors: Vec<ValidationIssue>,
    /// Validation warnings, in the order the rules ran.
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create a new validation result.
    pub fn new(message: String) -> Self {
        Self {
            message,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the total number of issues.
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// Print the result to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => self.print_text(),
        }
    }

    /// Print in text format.
    fn print_text(&self) {
        let status = if self.is_valid() {
            style("✓").green().bold()
        } else {
            style("✗").red().bold()
        };
        let first_line = self.message.lines().next().unwrap_or("");
        println!("{} {}", status, first_line);

        for error in &self.errors {
            println!("  {}", error.format());
        }

        for warning in &self.warnings {
            println!("  {}", warning.format());
        }
    }

    /// Print in JSON format.
    fn print_json(&self) {
        let json = serde_json::json!({
            "valid": self.is_valid(),
            "message": self.message,
            "errors": self.errors.iter().map(|e| {
                serde_json::json!({
                    "code": e.code,
                    "message": e.message,
                    "suggestion": e.suggestion,
                    "line": e.line,
                })
            }).collect::<Vec<_>>(),
            "warnings": self.warnings.iter().map(|w| {
                serde_json::json!({
                    "code": w.code,
                    "message": w.message,
                    "suggestion": w.suggestion,
                    "line": w.line,
                })
            }).collect::<Vec<_>>(),
        });

        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.is_valid() {
            if self.warnings.is_empty() {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", self.warnings.len())
            }
        } else {
            format!(
                "Invalid ({} errors, {} warnings)",
                self.errors.len(),
                self.warnings.len()
            )
        }
    }
}

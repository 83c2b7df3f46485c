// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::io::Read;

use console::style;

use crate::config::CgConfig;
use crate::error::{CgError, CommitError, ReleaseError, Result, ValidationError};

use super::args::{Cli, Commands, OutputFormat};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        CgConfig::load_from(config_path)?
    } else {
        CgConfig::load()?
    };

    // Dispatch to the appropriate command handler
    match cli.effective_command() {
        Commands::Check(args) => run_check(&cli, &config, args),
        Commands::Release(args) => run_release(&cli, &config, args),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Read from a file path, or stdin for `-`.
fn read_input(target: &str) -> Result<String> {
    if target == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| {
                CgError::Commit(CommitError::ReadFailed {
                    source_name: "stdin".to_string(),
                    message: e.to_string(),
                })
            })?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(target).map_err(|e| {
            CgError::Commit(CommitError::ReadFailed {
                source_name: target.to_string(),
                message: e.to_string(),
            })
        })
    }
}

/// Run the check command.
fn run_check(cli: &Cli, config: &CgConfig, args: super::args::CheckArgs) -> Result<()> {
    use crate::rules::RuleEngine;

    tracing::debug!("Running check command with args: {:?}", args);

    let raw = match args.message {
        Some(message) => message,
        None => read_input(&args.target)?,
    };
    if raw.trim().is_empty() {
        return Err(CgError::Commit(CommitError::EmptyMessage));
    }

    let engine = RuleEngine::new(config.clone());
    let strict = args.strict || cli.is_ci_mode();

    let results = if args.batch {
        engine.validate_batch(&raw)
    } else {
        vec![engine.validate_str(&raw)]
    };

    // Output results
    let mut has_errors = false;
    let mut has_warnings = false;

    for result in &results {
        if !result.errors.is_empty() {
            has_errors = true;
        }
        if !result.warnings.is_empty() {
            has_warnings = true;
        }
        result.print(cli.format);
    }

    // Determine exit status
    if has_errors || (strict && has_warnings) {
        Err(CgError::Validation(ValidationError::MultipleErrors {
            count: results.iter().map(|r| r.issue_count()).sum(),
        }))
    } else {
        Ok(())
    }
}

/// Run the release command.
fn run_release(cli: &Cli, config: &CgConfig, args: super::args::ReleaseArgs) -> Result<()> {
    use crate::release::{next_version, CommitRecord, NotesRenderer, ReleasePolicy};

    tracing::debug!("Running release command with args: {:?}", args);

    let raw = read_input(&args.input)?;
    let records: Vec<CommitRecord> = raw
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(CommitRecord::parse_log_line)
        .collect();

    let policy = ReleasePolicy::new(config.release.clone());
    let decision = policy.decide(&records);

    let current = args
        .current_version
        .as_deref()
        .map(|v| {
            semver::Version::parse(v.trim_start_matches('v')).map_err(|e| {
                CgError::Release(ReleaseError::InvalidVersion {
                    value: v.to_string(),
                    message: e.to_string(),
                })
            })
        })
        .transpose()?;
    let next = current.as_ref().and_then(|c| next_version(c, decision.bump));

    let notes = if args.notes {
        let renderer = NotesRenderer::new(config.release.clone())?;
        Some(renderer.render(
            &decision,
            next.as_ref(),
            args.previous_tag.as_deref(),
            chrono::Local::now().date_naive(),
        )?)
    } else {
        None
    };

    match cli.format {
        Some(OutputFormat::Json) => {
            let json = serde_json::json!({
                "bump": decision.bump,
                "currentVersion": current.as_ref().map(|v| v.to_string()),
                "nextVersion": next.as_ref().map(|v| v.to_string()),
                "commits": records.len(),
                "sections": decision.sections,
                "notes": notes,
                "changelogTitle": config.release.changelog_title,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&json).unwrap_or_default()
            );
        }
        _ => {
            println!(
                "{} {} commits analyzed",
                style("✓").green().bold(),
                records.len()
            );
            println!("Bump: {}", style(decision.bump).cyan());
            match (&current, &next) {
                (Some(current), Some(next)) => {
                    println!("Next version: {} -> {}", current, style(next).green());
                }
                (Some(_), None) => println!("{}", style("No release needed").dim()),
                _ => {}
            }
            for section in &decision.sections {
                println!("  {} ({} commits)", section.title, section.entries.len());
            }
            if let Some(ref notes) = notes {
                println!();
                println!("{}", notes);
            }
        }
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: super::args::InitArgs) -> Result<()> {
    tracing::debug!("Running init command with args: {:?}", args);

    let path = std::path::Path::new("cg.toml");
    if path.exists() && !args.force {
        return Err(CgError::WithContext {
            context: "init".to_string(),
            message: "cg.toml already exists (use --force to overwrite)".to_string(),
        });
    }

    std::fs::write(path, crate::config::default::example_config())?;
    println!("✓ Created cg.toml");
    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("cg {}", crate::version::version_string());
    Ok(())
}

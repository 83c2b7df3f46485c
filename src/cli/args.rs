// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CG - Conventional Commit Gate
///
/// Lint commit messages and compute release decisions.
#[derive(Parser, Debug)]
#[command(name = "cg")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Conventional commit gate", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to check if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable strict CI mode (warnings fail the run)
    #[arg(long, global = true)]
    pub ci: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate commit messages (default command)
    Check(CheckArgs),

    /// Compute version bump and changelog sections from commit headers
    Release(ReleaseArgs),

    /// Initialize cg configuration
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// File containing the commit message, or '-' for stdin
    #[arg(default_value = ".git/COMMIT_EDITMSG")]
    pub target: String,

    /// Validate this message instead of reading a file
    #[arg(short = 'm', long)]
    pub message: Option<String>,

    /// Treat the input as multiple messages separated by '---' lines
    #[arg(long)]
    pub batch: bool,

    /// Strict mode: treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            target: ".git/COMMIT_EDITMSG".to_string(),
            message: None,
            batch: false,
            strict: false,
        }
    }
}

/// Arguments for the release command.
#[derive(Parser, Debug, Clone)]
pub struct ReleaseArgs {
    /// File containing one commit header per line (an optional leading
    /// hash is recognized), or '-' for stdin
    #[arg(default_value = "-")]
    pub input: String,

    /// Current version; enables next-version computation
    #[arg(long)]
    pub current_version: Option<String>,

    /// Tag of the previous release; enables the compare link in notes
    #[arg(long)]
    pub previous_tag: Option<String>,

    /// Render markdown release notes
    #[arg(long)]
    pub notes: bool,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Check if running in CI mode.
    pub fn is_ci_mode(&self) -> bool {
        self.ci
    }

    /// Get the effective command, defaulting to Check if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Check(CheckArgs::default()))
    }
}

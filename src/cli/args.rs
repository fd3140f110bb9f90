// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cgate - commit policy gate for git hooks
///
/// Rejects commits whose staged files span several folders, or whose
/// message breaks the conventional commit format.
#[derive(Parser, Debug)]
#[command(name = "cgate")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Commit policy gate for git hooks", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to check if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Show per-file detail and statistics
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CGATE_CONFIG")]
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
    /// Validate staged files (pre-commit hook)
    Check(CheckArgs),

    /// Validate a commit message (commit-msg hook)
    CheckMsg(CheckMsgArgs),

    /// Print the commit prefix or prepend it to a message file
    Prefix(PrefixArgs),

    /// Manage git hooks
    Hooks(HooksArgs),

    /// List available presets
    Presets,

    /// Initialize cgate configuration
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Default, Clone)]
pub struct CheckArgs {
    /// Check these paths instead of the staged files
    #[arg(long, num_args = 1..)]
    pub files: Vec<String>,

    /// Do not write to the log file
    #[arg(long)]
    pub no_log: bool,
}

/// Arguments for the check-msg command.
#[derive(Parser, Debug, Clone)]
pub struct CheckMsgArgs {
    /// File holding the commit message (as passed to commit-msg)
    #[arg(required_unless_present = "message")]
    pub file: Option<PathBuf>,

    /// Check this message text instead of a file
    #[arg(short, long, conflicts_with = "file")]
    pub message: Option<String>,

    /// Do not write to the log file
    #[arg(long)]
    pub no_log: bool,
}

/// Arguments for the prefix command.
#[derive(Parser, Debug, Default, Clone)]
pub struct PrefixArgs {
    /// Commit message file to prepend the prefix to
    pub message_file: Option<PathBuf>,

    /// Message source as passed to prepare-commit-msg
    pub source: Option<String>,

    /// Commit SHA as passed to prepare-commit-msg
    pub sha: Option<String>,
}

/// Arguments for the hooks command.
#[derive(Parser, Debug, Clone)]
pub struct HooksArgs {
    /// Hook action to perform
    #[command(subcommand)]
    pub action: HooksAction,
}

/// Hook actions.
#[derive(Subcommand, Debug, Clone)]
pub enum HooksAction {
    /// Install git hooks
    Install {
        /// Specific hook to install
        #[arg(value_name = "HOOK")]
        hook: Option<String>,

        /// Replace existing hooks (they are backed up)
        #[arg(short, long)]
        force: bool,
    },

    /// Uninstall git hooks
    Uninstall {
        /// Specific hook to uninstall
        #[arg(value_name = "HOOK")]
        hook: Option<String>,
    },

    /// Show hook status
    Status,

    /// Run a hook manually (for testing)
    Run {
        /// Hook to run
        hook: String,

        /// Arguments to pass to the hook
        #[arg(trailing_var_arg = true)]
        args: Vec<String>,
    },
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Preset to configure
    #[arg(long, default_value = "folder-based")]
    pub preset: String,

    /// Write a minimal configuration instead of the annotated example
    #[arg(long)]
    pub minimal: bool,
}

impl Cli {
    /// Get the effective command, defaulting to Check if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Check(CheckArgs::default()))
    }
}

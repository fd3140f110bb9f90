// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! cgate - Commit Policy Gate
//!
//! Enforces structural commit rules from git hooks.
//!
//! # Features
//!
//! - **Folder-based preset**: staged files must share one folder at a
//!   configurable depth, with auto depth, per-path overrides and ignore globs
//! - **Conventional-commits preset**: `type(scope): description` headers with
//!   configurable types and scopes
//! - **Commit prefixes**: `[folder/path]` prefixes for prepare-commit-msg
//! - **Git Hooks**: installs pre-commit, commit-msg and prepare-commit-msg
//! - **Log file**: JSON-lines journal of every check with age-based pruning
//!
//! # Example
//!
//! ```
//! use cgate::config::{CgateConfig, Depth};
//! use cgate::presets::PresetRegistry;
//! use cgate::validator::CommitValidator;
//!
//! let registry = PresetRegistry::builtin();
//! let config = CgateConfig {
//!     depth: Depth::Fixed(2),
//!     ..CgateConfig::default()
//! };
//! let validator = CommitValidator::new(config, &registry);
//!
//! let files = vec!["src/a/x.ts".to_string(), "src/a/y.ts".to_string()];
//! let result = validator.validate(&files).unwrap();
//! assert!(result.is_valid());
//! assert_eq!(result.common_path(), Some("src/a"));
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod i18n;
pub mod journal;
pub mod presets;
pub mod validator;

// Re-exports for convenience
pub use config::CgateConfig;
pub use error::{CgateError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of cgate.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Whether the working tree had uncommitted changes at compile time.
    pub const GIT_DIRTY: Option<&str> = option_env!("VERGEN_GIT_DIRTY");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        let dirty = if GIT_DIRTY == Some("true") { "-dirty" } else { "" };
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({}{} {})", VERSION, &sha[..7.min(sha.len())], dirty, date)
            }
            (Some(sha), None) => {
                format!("{} ({}{})", VERSION, &sha[..7.min(sha.len())], dirty)
            }
            _ => VERSION.to_string(),
        }
    }
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for cgate.
//!
//! Configuration and environment problems are errors. Policy violations are
//! not: presets report them as data inside their result types, and only the
//! CLI turns a failed result into [`CgateError::ValidationFailed`] to set the
//! exit status.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cgate operations.
#[derive(Error, Debug)]
pub enum CgateError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Hook errors
    #[error("Hook error: {0}")]
    Hook(#[from] HookError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Commit rejected by the active preset
    #[error("Commit rejected: {count} policy violation(s)")]
    ValidationFailed { count: usize },

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Unknown preset '{name}'. Available presets: {}", .available.join(", "))]
    UnknownPreset {
        name: String,
        available: Vec<String>,
    },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Failed to get diff: {message}")]
    DiffFailed { message: String },

    #[error("Repository has no working directory")]
    BareRepository,
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::OpenFailed {
            message: err.message().to_string(),
        }
    }
}

/// Hook-related errors.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Failed to install hook '{hook}': {message}")]
    InstallFailed { hook: String, message: String },

    #[error("Hook already exists: {hook} (use --force to replace it)")]
    AlreadyExists { hook: String },

    #[error("Hook not found: {hook}")]
    NotFound { hook: String },

    #[error("Failed to remove hook '{hook}': {message}")]
    RemoveFailed { hook: String, message: String },

    #[error("Hook execution failed: {hook} - {message}")]
    ExecutionFailed { hook: String, message: String },

    #[error("Failed to render hook '{hook}': {message}")]
    RenderFailed { hook: String, message: String },
}

/// Result type alias for cgate operations.
pub type Result<T> = std::result::Result<T, CgateError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CgateError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

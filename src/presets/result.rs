// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Result types produced by presets.
//!
//! `valid` is never stored independently of `errors`: it is derived every
//! time an error is added.

use serde::Serialize;

/// Counters describing how a file list was processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationStats {
    pub total_files: usize,
    pub filtered_files: usize,
    pub ignored_files: usize,
    pub unique_folders: usize,
}

/// Result of validating a set of staged files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    valid: bool,
    common_path: Option<String>,
    files: Vec<String>,
    errors: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<ValidationStats>,
}

impl ValidationResult {
    /// Create a passing result for the given files.
    pub fn new(files: Vec<String>) -> Self {
        Self {
            valid: true,
            common_path: None,
            files,
            errors: Vec::new(),
            warnings: Vec::new(),
            stats: None,
        }
    }

    /// Set the common path.
    pub fn with_common_path(mut self, common_path: Option<String>) -> Self {
        self.common_path = common_path;
        self
    }

    /// Attach statistics.
    pub fn with_stats(mut self, stats: ValidationStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Record an error. The result becomes invalid.
    pub fn push_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.valid = false;
    }

    /// Record a warning.
    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn common_path(&self) -> Option<&str> {
        self.common_path.as_deref()
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn stats(&self) -> Option<&ValidationStats> {
        self.stats.as_ref()
    }

    /// True when files were staged but every one of them was ignored.
    pub fn all_ignored(&self) -> bool {
        self.stats
            .map(|s| s.total_files > 0 && s.filtered_files == 0)
            .unwrap_or(false)
    }
}

/// Result of validating a commit message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitMsgValidationResult {
    valid: bool,
    errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prefix: Option<String>,
}

impl CommitMsgValidationResult {
    /// Create a passing result.
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            prefix: None,
        }
    }

    /// Set the prefix recovered from the message header.
    pub fn with_prefix(mut self, prefix: Option<String>) -> Self {
        self.prefix = prefix;
        self
    }

    /// Record an error. The result becomes invalid.
    pub fn push_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.valid = false;
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }
}

impl Default for CommitMsgValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The preset abstraction.

use crate::config::CgateConfig;

use super::result::{CommitMsgValidationResult, ValidationResult};

/// Input for prefix generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixSource<'a> {
    /// Outcome of a file validation.
    Files {
        common_path: Option<&'a str>,
        all_ignored: bool,
    },
    /// A raw commit message.
    Message(&'a str),
}

/// A commit policy selectable by name.
///
/// Presets are stateless: every call depends only on its arguments, so one
/// instance can serve any number of validations.
pub trait Preset: std::fmt::Debug + Send + Sync {
    /// Registry key of the preset.
    fn name(&self) -> &str;

    /// One-line description for `cgate presets`.
    fn description(&self) -> &str;

    /// Validate a list of repository-relative staged file paths.
    fn validate_files(&self, files: &[String], config: &CgateConfig) -> ValidationResult;

    /// Validate a commit message.
    fn validate_commit_message(&self, message: &str, config: &CgateConfig)
        -> CommitMsgValidationResult;

    /// Build the commit prefix for display or for prepending to a message.
    ///
    /// Returns an empty string when the preset has nothing to say about the
    /// given source.
    fn commit_prefix(&self, source: PrefixSource<'_>, config: &CgateConfig) -> String;
}

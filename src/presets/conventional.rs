// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Conventional-commits preset.

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::CgateConfig;

use super::preset::{PrefixSource, Preset};
use super::result::{CommitMsgValidationResult, ValidationResult, ValidationStats};

lazy_static! {
    /// `type(scope): description` on the first line.
    static ref HEADER_REGEX: Regex =
        Regex::new(r"^(?P<type>[^\s():]+)(?:\((?P<scope>[^()]+)\))?: (?P<description>.*)$")
            .unwrap();
}

/// Requires the commit message header to follow conventional commits.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConventionalCommitsPreset;

impl ConventionalCommitsPreset {
    pub const NAME: &'static str = "conventional-commits";
}

/// Parsed first line of a commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Header<'a> {
    commit_type: &'a str,
    scope: Option<&'a str>,
    description: &'a str,
}

impl<'a> Header<'a> {
    fn parse(message: &'a str) -> Option<Self> {
        let first_line = message.lines().next()?.trim_end_matches('\r');
        let captures = HEADER_REGEX.captures(first_line)?;

        Some(Self {
            commit_type: captures.name("type")?.as_str(),
            scope: captures.name("scope").map(|m| m.as_str()),
            description: captures.name("description").map(|m| m.as_str()).unwrap_or(""),
        })
    }

    /// `type(scope)` exactly as written.
    fn prefix(&self) -> String {
        match self.scope {
            Some(scope) => format!("{}({})", self.commit_type, scope),
            None => self.commit_type.to_string(),
        }
    }
}

impl Preset for ConventionalCommitsPreset {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Commit messages must follow 'type(scope): description'"
    }

    fn validate_files(&self, files: &[String], _config: &CgateConfig) -> ValidationResult {
        ValidationResult::new(files.to_vec()).with_stats(ValidationStats {
            total_files: files.len(),
            filtered_files: files.len(),
            ignored_files: 0,
            unique_folders: 0,
        })
    }

    fn validate_commit_message(
        &self,
        message: &str,
        config: &CgateConfig,
    ) -> CommitMsgValidationResult {
        let header = match Header::parse(message) {
            Some(header) => header,
            None => {
                let mut result = CommitMsgValidationResult::new();
                result.push_error(format!(
                    "Missing or invalid commit type: expected 'type(scope): description' with type one of: {}",
                    config.types.join(", ")
                ));
                return result;
            }
        };

        let mut result = CommitMsgValidationResult::new().with_prefix(Some(header.prefix()));

        if !config.types.iter().any(|t| t == header.commit_type) {
            result.push_error(format!(
                "Invalid commit type '{}'. Allowed types: {}",
                header.commit_type,
                config.types.join(", ")
            ));
        }

        match header.scope {
            Some(scope) => {
                if !config.scopes.is_empty() && !config.scopes.iter().any(|s| s == scope) {
                    result.push_error(format!(
                        "Invalid scope '{}'. Allowed scopes: {}",
                        scope,
                        config.scopes.join(", ")
                    ));
                }
            }
            None if config.require_scope => {
                result.push_error("Scope is required: use 'type(scope): description'");
            }
            None => {}
        }

        if header.description.trim().is_empty() {
            result.push_error("Description must not be empty");
        }

        result
    }

    fn commit_prefix(&self, source: PrefixSource<'_>, _config: &CgateConfig) -> String {
        match source {
            PrefixSource::Message(message) => Header::parse(message)
                .map(|header| header.prefix())
                .unwrap_or_default(),
            PrefixSource::Files { .. } => String::new(),
        }
    }
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the structure loaded from cgate.toml (or .cgate.json). Keys are
//! snake_case; every key also accepts its camelCase spelling.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// The main configuration structure for cgate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CgateConfig {
    /// Name of the preset to enforce.
    pub preset: String,

    /// Whether validation runs at all.
    pub enabled: bool,

    /// Journal file, relative to the repository root unless absolute.
    #[serde(alias = "logFile")]
    pub log_file: PathBuf,

    /// Journal entries older than this are pruned on write.
    #[serde(alias = "logMaxAgeHours", skip_serializing_if = "Option::is_none")]
    pub log_max_age_hours: Option<u64>,

    /// Language for user-facing output.
    pub language: Language,

    /// Print per-file detail and statistics.
    pub verbose: bool,

    /// Folder depth used to group staged files.
    pub depth: Depth,

    /// Glob patterns for files excluded from the folder check.
    #[serde(alias = "ignorePaths")]
    pub ignore_paths: Vec<String>,

    /// Maximum number of non-ignored files in one commit.
    #[serde(alias = "maxFiles", skip_serializing_if = "Option::is_none")]
    pub max_files: Option<usize>,

    /// Per-path depth overrides, matched by longest prefix.
    #[serde(alias = "depthOverrides")]
    pub depth_overrides: BTreeMap<String, usize>,

    /// Upper bound for auto-detected depth.
    #[serde(alias = "maxDepth")]
    pub max_depth: usize,

    /// Allowed conventional commit types.
    pub types: Vec<String>,

    /// Allowed conventional commit scopes (empty means any).
    pub scopes: Vec<String>,

    /// Whether a conventional commit scope is mandatory.
    #[serde(alias = "requireScope")]
    pub require_scope: bool,

    /// Prefix marker used when files live at the repository root.
    #[serde(alias = "rootPrefix")]
    pub root_prefix: String,

    /// Prefix marker used when every staged file was ignored.
    #[serde(alias = "ignoredPrefix")]
    pub ignored_prefix: String,
}

impl Default for CgateConfig {
    fn default() -> Self {
        Self {
            preset: "folder-based".to_string(),
            enabled: true,
            log_file: PathBuf::from(".cgate.log"),
            log_max_age_hours: Some(24 * 7),
            language: Language::En,
            verbose: false,
            depth: Depth::Auto,
            ignore_paths: Vec::new(),
            max_files: None,
            depth_overrides: BTreeMap::new(),
            max_depth: 5,
            types: vec![
                "feat".to_string(),
                "fix".to_string(),
                "docs".to_string(),
                "style".to_string(),
                "refactor".to_string(),
                "perf".to_string(),
                "test".to_string(),
                "chore".to_string(),
                "revert".to_string(),
                "build".to_string(),
                "ci".to_string(),
            ],
            scopes: Vec::new(),
            require_scope: false,
            root_prefix: "root".to_string(),
            ignored_prefix: "misc".to_string(),
        }
    }
}

impl CgateConfig {
    /// Load configuration from the default locations.
    pub fn load() -> Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Check the values serde cannot check on its own.
    ///
    /// The folder preset relies on every depth being at least 1.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.preset.trim().is_empty() {
            return Err(invalid("preset", "must not be empty"));
        }
        if self.max_depth == 0 {
            return Err(invalid("max_depth", "must be at least 1"));
        }
        if self.max_files == Some(0) {
            return Err(invalid("max_files", "must be at least 1 when set"));
        }
        for (prefix, depth) in &self.depth_overrides {
            if *depth == 0 {
                return Err(invalid(
                    "depth_overrides",
                    &format!("depth for '{}' must be at least 1", prefix),
                ));
            }
        }
        Ok(())
    }
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.to_string(),
    }
}

/// Output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ko,
}

/// Folder depth setting: a fixed number of directory levels or `"auto"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "DepthRepr", into = "DepthRepr")]
pub enum Depth {
    Fixed(usize),
    #[default]
    Auto,
}

impl std::fmt::Display for Depth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Depth::Fixed(n) => write!(f, "{}", n),
            Depth::Auto => write!(f, "auto"),
        }
    }
}

/// Wire form of [`Depth`]: an integer or a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum DepthRepr {
    Number(i64),
    Text(String),
}

impl TryFrom<DepthRepr> for Depth {
    type Error = String;

    fn try_from(value: DepthRepr) -> std::result::Result<Self, Self::Error> {
        match value {
            DepthRepr::Number(n) if n >= 1 => Ok(Depth::Fixed(n as usize)),
            DepthRepr::Number(n) => Err(format!("depth must be at least 1 (got {})", n)),
            DepthRepr::Text(s) if s.eq_ignore_ascii_case("auto") => Ok(Depth::Auto),
            DepthRepr::Text(s) => match s.trim().parse::<i64>() {
                Ok(n) => Depth::try_from(DepthRepr::Number(n)),
                Err(_) => Err(format!("depth must be a positive integer or \"auto\" (got \"{}\")", s)),
            },
        }
    }
}

impl From<Depth> for DepthRepr {
    fn from(depth: Depth) -> Self {
        match depth {
            Depth::Fixed(n) => DepthRepr::Number(n as i64),
            Depth::Auto => DepthRepr::Text("auto".to_string()),
        }
    }
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Glob matching for ignore patterns.
//!
//! Patterns are relative to the repository root and case-sensitive. `*` and
//! `?` stay within one path segment, `**` spans directories. A pattern that
//! fails to compile never matches.

use glob::{MatchOptions, Pattern};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Returns true when `path` matches at least one of `patterns`.
pub fn match_any<S: AsRef<str>>(path: &str, patterns: &[S]) -> bool {
    let path = normalize_path(path);
    patterns
        .iter()
        .any(|pattern| matches_pattern(&path, pattern.as_ref()))
}

fn matches_pattern(path: &str, pattern: &str) -> bool {
    let pattern = normalize_path(pattern);
    match Pattern::new(&pattern) {
        Ok(compiled) => compiled.matches_with(path, MATCH_OPTIONS),
        Err(e) => {
            tracing::warn!("Ignoring malformed glob pattern '{}': {}", pattern, e);
            false
        }
    }
}

/// Normalize a repository-relative path.
///
/// Backslashes become `/`, and leading `./` or `/`, empty segments and `.`
/// segments are dropped.
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/")
}

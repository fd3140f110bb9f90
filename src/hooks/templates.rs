// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook script templates.

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::{CgateError, HookError, Result};

/// Marker written into every generated hook.
pub const HOOK_MARKER: &str = "Generated by cgate";

const HOOK_SCRIPT: &str = r#"#!/bin/sh
# cgate Git Hook ({{hook}})
# Generated by cgate v{{version}}
# Remove with: cgate hooks uninstall {{hook}}

if ! command -v {{binary}} >/dev/null 2>&1; then
    echo "{{binary}} not found in PATH, skipping {{hook}} hook" >&2
    exit 0
fi

exec {{binary}} {{command}}
"#;

/// Hooks that cgate knows how to install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookTemplate {
    PreCommit,
    CommitMsg,
    PrepareCommitMsg,
}

#[derive(Serialize)]
struct HookContext<'a> {
    hook: &'a str,
    version: &'a str,
    binary: &'a str,
    command: &'a str,
}

impl HookTemplate {
    /// All supported hooks.
    pub fn all() -> &'static [HookTemplate] {
        &[
            HookTemplate::PreCommit,
            HookTemplate::CommitMsg,
            HookTemplate::PrepareCommitMsg,
        ]
    }

    /// File name inside `.git/hooks`.
    pub fn filename(&self) -> &'static str {
        match self {
            HookTemplate::PreCommit => "pre-commit",
            HookTemplate::CommitMsg => "commit-msg",
            HookTemplate::PrepareCommitMsg => "prepare-commit-msg",
        }
    }

    /// cgate invocation run by the hook.
    fn command(&self) -> &'static str {
        match self {
            HookTemplate::PreCommit => "check",
            HookTemplate::CommitMsg => "check-msg \"$1\"",
            HookTemplate::PrepareCommitMsg => "prefix \"$1\" \"$2\"",
        }
    }

    /// Render the hook script.
    pub fn generate(&self) -> Result<String> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        let context = HookContext {
            hook: self.filename(),
            version: crate::version::VERSION,
            binary: "cgate",
            command: self.command(),
        };

        handlebars
            .render_template(HOOK_SCRIPT, &context)
            .map_err(|e| {
                CgateError::Hook(HookError::RenderFailed {
                    hook: self.filename().to_string(),
                    message: e.to_string(),
                })
            })
    }
}

impl std::str::FromStr for HookTemplate {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pre-commit" | "pre_commit" => Ok(HookTemplate::PreCommit),
            "commit-msg" | "commit_msg" => Ok(HookTemplate::CommitMsg),
            "prepare-commit-msg" | "prepare_commit_msg" => Ok(HookTemplate::PrepareCommitMsg),
            _ => Err(()),
        }
    }
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit policies.
//!
//! A preset decides whether a set of staged files or a commit message is
//! acceptable. Presets are looked up by name in a [`PresetRegistry`] that is
//! built once at startup.

mod conventional;
mod folder;
pub mod matcher;
mod preset;
mod registry;
mod result;

pub use conventional::ConventionalCommitsPreset;
pub use folder::FolderBasedPreset;
pub use matcher::match_any;
pub use preset::{PrefixSource, Preset};
pub use registry::PresetRegistry;
pub use result::{CommitMsgValidationResult, ValidationResult, ValidationStats};

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Supplies the staged file list and the repository layout needed by hooks
//! and the journal.

mod repo;

pub use repo::{open_repo, staged_files, Repository};

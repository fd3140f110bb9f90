// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for cgate.
//!
//! This module handles command-line argument parsing, command dispatch and
//! rendering of results.

pub mod args;
mod dispatch;
mod report;

pub use args::{Cli, Commands};
pub use dispatch::run;

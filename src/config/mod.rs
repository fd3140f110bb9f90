// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for cgate.
//!
//! This module handles discovering, parsing and validating configuration
//! from TOML or JSON files, falling back to defaults.

pub mod default;
mod loader;
mod schema;

pub use loader::{
    find_config_file, find_config_file_from, load_config, load_config_from, parse_config,
    parse_json_config,
};
pub use schema::*;

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for vibecheck.
//!
//! This module handles discovering, loading and parsing vibecheck.toml.

pub mod default;
mod loader;
mod schema;

pub use default::default_config;
pub use loader::{find_config_file, find_config_file_from, load_config, parse_config, CONFIG_FILES};
pub use schema::*;

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for gac.
//!
//! Settings come from a project file, a global per-user file, the
//! `GAC_API_KEY` environment variable and built-in defaults, in that order.

mod loader;
mod schema;

pub use loader::{
    global_config_path, load_config, load_config_from, parse_config, resolve, API_KEY_ENV,
    PROJECT_CONFIG_FILE,
};
pub use schema::*;

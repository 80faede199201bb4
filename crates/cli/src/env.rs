// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! The variable name constants are generated by `build.rs` and live in the
//! [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Path of the Things database from `THINGSDB`, if set and non-empty.
pub fn database() -> Option<PathBuf> {
    non_empty(vars::THINGSDB).map(PathBuf::from)
}

/// Path of the config file from `THINGS_CONFIG`, if set and non-empty.
pub fn config_file() -> Option<PathBuf> {
    non_empty(vars::THINGS_CONFIG).map(PathBuf::from)
}

/// Tracing filter directives from `THINGS_LOG`.
pub fn log_filter() -> Option<String> {
    non_empty(vars::THINGS_LOG)
}

/// Returns `true` if `THINGS_TIMINGS` is set (any value).
pub fn timings() -> bool {
    std::env::var(vars::THINGS_TIMINGS).is_ok()
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

pub fn xdg_config_home() -> Option<PathBuf> {
    non_empty(vars::XDG_CONFIG_HOME).map(PathBuf::from)
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;

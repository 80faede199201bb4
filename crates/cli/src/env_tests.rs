// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

// Each test owns distinct variables so they can run in parallel.

#[test]
fn vars_constants() {
    assert_eq!(vars::THINGSDB, "THINGSDB");
    assert_eq!(vars::THINGS_CONFIG, "THINGS_CONFIG");
    assert_eq!(vars::THINGS_LOG, "THINGS_LOG");
    assert_eq!(vars::THINGS_TIMINGS, "THINGS_TIMINGS");
    assert_eq!(vars::NO_COLOR, "NO_COLOR");
    assert_eq!(vars::COLOR, "COLOR");
    assert_eq!(vars::XDG_CONFIG_HOME, "XDG_CONFIG_HOME");
}

#[test]
fn database_set_and_empty() {
    std::env::set_var("THINGSDB", "/tmp/main.sqlite");
    assert_eq!(database(), Some(PathBuf::from("/tmp/main.sqlite")));
    std::env::set_var("THINGSDB", "");
    assert_eq!(database(), None);
    std::env::remove_var("THINGSDB");
    assert_eq!(database(), None);
}

#[test]
fn timings_any_value() {
    std::env::remove_var("THINGS_TIMINGS");
    assert!(!timings());
    std::env::set_var("THINGS_TIMINGS", "yes");
    assert!(timings());
    std::env::remove_var("THINGS_TIMINGS");
}

#[test]
fn log_filter_passthrough() {
    std::env::set_var("THINGS_LOG", "things_core=debug");
    assert_eq!(log_filter().as_deref(), Some("things_core=debug"));
    std::env::remove_var("THINGS_LOG");
    assert_eq!(log_filter(), None);
}

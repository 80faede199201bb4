// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::path::Path;

pub use predicates::prelude::*;
pub use tempfile::TempDir;
pub use things_core::testing::Fixture;

/// The `things` binary with the user's environment shut out: no config
/// file, no `THINGSDB`, no forced colors.
pub fn things() -> Command {
    let mut cmd = cargo_bin_cmd!("things");
    cmd.env("THINGS_CONFIG", "/nonexistent/things/config.toml")
        .env_remove("THINGSDB")
        .env_remove("THINGS_LOG")
        .env_remove("THINGS_TIMINGS")
        .env_remove("COLOR")
        .env("NO_COLOR", "1");
    cmd
}

/// `things --database <fixture>` followed by `args`.
pub fn things_at(db: &Path, args: &[&str]) -> Command {
    let mut cmd = things();
    cmd.arg("--database").arg(db).args(args);
    cmd
}

pub fn sample() -> Fixture {
    Fixture::sample().unwrap()
}

/// Run with `-o json` and parse stdout.
pub fn json(db: &Path, args: &[&str]) -> serde_json::Value {
    let output = things_at(db, args).arg("-o").arg("json").output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

/// The `uuid` of every element of a JSON array.
pub fn uuids(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["uuid"].as_str().unwrap().to_string())
        .collect()
}

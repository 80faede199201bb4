// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn config_path_honours_things_config() {
    things()
        .env("THINGS_CONFIG", "/tmp/elsewhere/config.toml")
        .args(["config", "path"])
        .assert()
        .success()
        .stdout("/tmp/elsewhere/config.toml\n");
}

#[test]
fn config_path_uses_xdg_config_home() {
    let temp = TempDir::new().unwrap();
    things()
        .env_remove("THINGS_CONFIG")
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("things/config.toml\n"))
        .stdout(predicate::str::starts_with(temp.path().to_string_lossy().to_string()));
}

#[test]
fn config_file_supplies_database_and_output() {
    let fixture = sample();
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    std::fs::write(
        &config,
        format!(
            "database = \"{}\"\noutput = \"json\"\n",
            fixture.path().display()
        ),
    )
    .unwrap();

    let output = things()
        .env("THINGS_CONFIG", &config)
        .args(["tasks", "--start", "inbox"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(uuids(&value), ["T-milk"]);

    // The flag wins over the config file.
    things()
        .env("THINGS_CONFIG", &config)
        .args(["-o", "text", "tasks", "--start", "inbox"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[ ] Buy milk"));
}

#[test]
fn thingsdb_env_selects_database() {
    let fixture = sample();
    things()
        .env("THINGSDB", fixture.path())
        .args(["areas"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(A-work)"));
}

#[test]
fn config_show_reports_resolution() {
    let fixture = sample();
    let output = things_at(fixture.path(), &["-o", "json", "config", "show"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["config"], "/nonexistent/things/config.toml");
    assert_eq!(value["database"], fixture.path().to_string_lossy().as_ref());
    assert_eq!(value["output"], "json");
}

#[test]
fn config_show_text_is_effective_toml() {
    let fixture = sample();
    let output = things_at(fixture.path(), &["config", "show"]).output().unwrap();
    assert!(output.status.success());
    similar_asserts::assert_eq!(
        String::from_utf8_lossy(&output.stdout).into_owned(),
        format!(
            "# /nonexistent/things/config.toml\ndatabase = \"{}\"\noutput = \"text\"\n",
            fixture.path().display()
        )
    );
}

#[test]
fn invalid_config_is_reported() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    std::fs::write(&config, "colour = true\n").unwrap();
    things()
        .env("THINGS_CONFIG", &config)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config error"));
}

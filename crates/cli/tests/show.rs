// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn show_prints_detail_view() {
    let fixture = sample();
    things_at(fixture.path(), &["show", "T-milk"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "[ ] Buy milk  due 2021-03-28  #Errand #Urgent  (T-milk)\n",
        ))
        .stdout(predicate::str::contains("  uuid:      T-milk\n"))
        .stdout(predicate::str::contains("  start:     inbox\n"))
        .stdout(predicate::str::contains("  area:      Home\n"))
        .stdout(predicate::str::contains("  reminder:  12:34\n"))
        .stdout(predicate::str::contains("  tags:      Errand, Urgent\n"))
        .stdout(predicate::str::contains("\n  whole, not skim\n"));
}

#[test]
fn show_finds_closed_tasks() {
    let fixture = sample();
    things_at(fixture.path(), &["show", "T-call"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[-] Call mom's friend"))
        .stdout(predicate::str::contains("  status:    canceled\n"));
}

#[test]
fn show_json_with_checklist() {
    let fixture = sample();
    let value = json(fixture.path(), &["show", "T-copy", "--items"]);
    assert_eq!(value["uuid"], "T-copy");
    assert_eq!(value["heading_title"], "Prep");
    assert_eq!(value["checklist"][0]["status"], "completed");
    assert_eq!(value["checklist"][1]["status"], "incomplete");
}

#[test]
fn show_unknown_uuid_fails() {
    let fixture = sample();
    things_at(fixture.path(), &["show", "T-missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: task not found: T-missing"));
}

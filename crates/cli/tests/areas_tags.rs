// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn areas_as_text() {
    let fixture = sample();
    let output = things_at(fixture.path(), &["areas", "--items"]).output().unwrap();
    assert!(output.status.success());
    similar_asserts::assert_eq!(
        String::from_utf8_lossy(&output.stdout).into_owned(),
        [
            "Work  #Office  (A-work)",
            "  [ ] Launch site (project)  due 2099-12-31  (P-launch)",
            "    ## Prep  (H-prep)",
            "      [ ] Write copy  start 2021-03-28  #Urgent  (T-copy)",
            "        - [x] Outline",
            "        - [ ] Polish",
            "Home  (A-home)",
            "  [ ] Buy milk  due 2021-03-28  #Errand #Urgent  (T-milk)",
            "",
        ]
        .join("\n")
    );
}

#[test]
fn areas_by_tag() {
    let fixture = sample();
    let value = json(fixture.path(), &["areas", "--tag", "Office"]);
    assert_eq!(uuids(&value), ["A-work"]);
    assert_eq!(value[0]["visible"], true);
}

#[test]
fn areas_with_items() {
    let fixture = sample();
    let value = json(fixture.path(), &["areas", "--uuid", "A-home", "--items"]);
    assert_eq!(uuids(&value[0]["items"]), ["T-milk"]);
}

#[test]
fn tags_as_text() {
    let fixture = sample();
    things_at(fixture.path(), &["tags"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Errand  [e]  (G-errand)\n"))
        .stdout(predicate::str::contains("Office  (G-office)\n"))
        .stdout(predicate::str::contains("Urgent  [u]  in G-office  (G-urgent)\n"));
}

#[test]
fn tags_parent_filters() {
    let fixture = sample();
    let children = json(fixture.path(), &["tags", "--parent", "G-office"]);
    assert_eq!(uuids(&children), ["G-urgent"]);

    let top = json(fixture.path(), &["tags", "--top-level"]);
    assert_eq!(uuids(&top), ["G-errand", "G-office"]);
}

#[test]
fn tags_with_items() {
    let fixture = sample();
    let value = json(fixture.path(), &["tags", "--uuid", "G-office", "--items"]);
    assert_eq!(uuids(&value[0]["areas"]), ["A-work"]);
    // Deploy is completed, so only incomplete tasks appear.
    assert_eq!(value[0].get("tasks"), None);

    let urgent = json(fixture.path(), &["tags", "--uuid", "G-urgent", "--items"]);
    assert_eq!(uuids(&urgent[0]["tasks"]), ["T-copy", "T-milk"]);
}

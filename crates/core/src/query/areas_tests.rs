// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::testing::Fixture;

fn titles(areas: &[Area]) -> Vec<&str> {
    areas.iter().map(|a| a.title.as_str()).collect()
}

#[test]
fn all_areas_in_list_order() {
    let fixture = Fixture::sample().unwrap();
    let db = fixture.open().unwrap();
    let areas = db.areas().all(&CancelToken::new()).unwrap();
    assert_eq!(titles(&areas), ["Work", "Home"]);
    assert_eq!(areas[0].tags, ["Office"]);
    assert!(areas[1].tags.is_empty());
    assert!(areas.iter().all(|a| a.visible));
}

#[test]
fn where_clause_defaults_to_true() {
    let fixture = Fixture::empty().unwrap();
    let db = fixture.open().unwrap();
    assert_eq!(db.areas().where_clause(), "TRUE");
    assert_eq!(
        db.areas().uuid("A-work").tag(true).where_clause(),
        "AREA.uuid = 'A-work' AND TAG.title IS NOT NULL"
    );
}

#[test]
fn filter_by_tag() {
    let fixture = Fixture::sample().unwrap();
    let db = fixture.open().unwrap();
    let token = CancelToken::new();
    assert_eq!(titles(&db.areas().tag("Office").all(&token).unwrap()), ["Work"]);
    assert_eq!(titles(&db.areas().tag(false).all(&token).unwrap()), ["Home"]);
}

#[test]
fn first_by_title_and_uuid() {
    let fixture = Fixture::sample().unwrap();
    let db = fixture.open().unwrap();
    let token = CancelToken::new();
    assert_eq!(db.areas().title("Home").first(&token).unwrap().uuid, "A-home");
    assert_eq!(db.areas().uuid("A-work").first(&token).unwrap().title, "Work");
    let err = db.areas().uuid("A-none").first(&token).unwrap_err();
    assert!(matches!(err, Error::AreaNotFound(ref id) if id == "A-none"));
}

#[test]
fn hidden_area() {
    let fixture = Fixture::sample().unwrap();
    fixture
        .execute("UPDATE TMArea SET visible = 0 WHERE uuid = 'A-home'")
        .unwrap();
    let db = fixture.open().unwrap();
    let home = db.areas().uuid("A-home").first(&CancelToken::new()).unwrap();
    assert!(!home.visible);
}

#[test]
fn include_items_attaches_area_tasks() {
    let fixture = Fixture::sample().unwrap();
    let db = fixture.open().unwrap();
    let areas = db
        .areas()
        .include_items(true)
        .all(&CancelToken::new())
        .unwrap();
    assert_eq!(titles(&areas), ["Work", "Home"]);

    let work: Vec<&str> = areas[0].items.iter().map(|t| t.uuid.as_str()).collect();
    assert_eq!(work, ["P-launch"]);
    assert_eq!(areas[0].items[0].items[0].uuid, "H-prep");

    let home: Vec<&str> = areas[1].items.iter().map(|t| t.uuid.as_str()).collect();
    assert_eq!(home, ["T-milk"]);
}

#[test]
fn cancelled_token_fails_query() {
    let fixture = Fixture::sample().unwrap();
    let db = fixture.open().unwrap();
    let token = CancelToken::new();
    token.cancel();
    assert!(matches!(db.areas().all(&token), Err(Error::Cancelled)));
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn format_error_mentions_input_and_hint() {
    let msg = Error::Format("03-28-2021".to_string()).to_string();
    assert!(msg.contains("invalid date"));
    assert!(msg.contains("03-28-2021"));
    assert!(msg.contains("YYYY-MM-DD"));
}

#[test]
fn not_found_errors_name_the_entity() {
    assert!(Error::TaskNotFound("abc".to_string())
        .to_string()
        .starts_with("task not found"));
    assert!(Error::AreaNotFound("abc".to_string())
        .to_string()
        .starts_with("area not found"));
    assert!(Error::TagNotFound("abc".to_string())
        .to_string()
        .starts_with("tag not found"));
}

#[test]
fn cancelled_display() {
    assert_eq!(Error::Cancelled.to_string(), "query cancelled");
}

#[test]
fn database_not_found_has_hint() {
    let msg = Error::DatabaseNotFound("/tmp/x.sqlite".to_string()).to_string();
    assert!(msg.contains("/tmp/x.sqlite"));
    assert!(msg.contains("THINGSDB"));
}

#[test]
fn rusqlite_errors_convert() {
    let err: Error = rusqlite::Error::QueryReturnedNoRows.into();
    assert!(matches!(err, Error::Database(_)));
    assert!(err.to_string().starts_with("database error"));
}

#[test]
fn invalid_enum_values_list_choices() {
    let msg = Error::InvalidStatus("done".to_string()).to_string();
    assert!(msg.contains("'done'"));
    assert!(msg.contains("incomplete, completed, canceled"));
    assert!(Error::InvalidTaskType("epic".to_string())
        .to_string()
        .contains("todo, project, heading"));
}

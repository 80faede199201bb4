// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn empty_builder_is_true() {
    assert_eq!(FilterBuilder::new().compile(), "TRUE");
}

#[test]
fn all_empty_filters_compile_to_true() {
    let sql = FilterBuilder::new()
        .equal("a", None)
        .truthy("b", None)
        .search("", &["c", "d"])
        .things_date("e", DateOp::Lt, None)
        .unix_range("f", "7")
        .parsed("g", DateInput::parse("junk"), DateEncoding::Unix)
        .static_sql("")
        .compile();
    assert_eq!(sql, "TRUE");
}

#[test]
fn non_empty_filters_join_with_and_in_order() {
    let sql = FilterBuilder::new()
        .truthy("TASK.trashed", false)
        .equal("TASK.status", None)
        .equal("TASK.type", Value::Int(0))
        .search("milk", &["TASK.title"])
        .compile();
    assert_eq!(
        sql,
        "NOT IFNULL(TASK.trashed,0) AND TASK.type = 0 AND (TASK.title LIKE '%milk%')"
    );
}

#[test]
fn no_dangling_and_around_empty_filters() {
    let sql = FilterBuilder::new()
        .equal("a", None)
        .equal("b", Value::Int(1))
        .equal("c", None)
        .compile();
    assert_eq!(sql, "b = 1");
}

#[test]
fn duplicates_are_independent_terms() {
    let sql = FilterBuilder::new()
        .equal("a", Value::Int(1))
        .equal("a", Value::Int(2))
        .compile();
    assert_eq!(sql, "a = 1 AND a = 2");
}

#[test]
fn or_group_inside_builder_keeps_parentheses() {
    let sql = FilterBuilder::new()
        .equal("a", Value::Int(1))
        .or([Filter::truthy("b", true), Filter::truthy("c", true)])
        .compile();
    assert_eq!(sql, "a = 1 AND (b OR c)");
}

#[test]
fn add_accepts_prebuilt_filters() {
    let builder = FilterBuilder::new().add(Filter::static_sql("x = 1"));
    assert_eq!(builder.compile(), "x = 1");
    assert_eq!(builder.add(Filter::static_sql("")).compile(), "x = 1");
}

#[test]
fn builder_is_a_value() {
    let base = FilterBuilder::new().equal("a", Value::Int(1));
    let extended = base.clone().equal("b", Value::Int(2));
    assert_eq!(base.compile(), "a = 1");
    assert_eq!(extended.compile(), "a = 1 AND b = 2");
}

#[test]
fn display_matches_compile() {
    let builder = FilterBuilder::new().unix_date("c", DateOp::Exists, None);
    assert_eq!(builder.to_string(), builder.compile());
    assert_eq!(FilterBuilder::new().to_string(), "TRUE");
}

#[test]
fn compiled_clause_runs_in_sqlite() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE t (title TEXT, trashed INTEGER, deadline INTEGER);
         INSERT INTO t VALUES ('a', 0, NULL), ('b', 1, NULL), ('c', NULL, 132464128);",
    )
    .unwrap();
    let clause = FilterBuilder::new()
        .truthy("trashed", false)
        .things_date("deadline", DateOp::NotExists, None)
        .compile();
    let count: i64 = conn
        .query_row(&format!("SELECT COUNT(*) FROM t WHERE {clause}"), [], |r| {
            r.get(0)
        })
        .unwrap();
    assert_eq!(count, 1);

    let all: i64 = conn
        .query_row(
            &format!("SELECT COUNT(*) FROM t WHERE {}", FilterBuilder::new()),
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(all, 3);
}

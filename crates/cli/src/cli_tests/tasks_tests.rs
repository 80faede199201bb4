// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use yare::parameterized;

fn tasks_args(args: &[&str]) -> TasksArgs {
    let argv = ["things", "tasks"].iter().chain(args).copied();
    match Cli::try_parse_from(argv).unwrap().command {
        Command::Tasks(args) => args,
        other => panic!("expected tasks, got {other:?}"),
    }
}

#[test]
fn test_defaults() {
    let args = tasks_args(&[]);
    assert_eq!(args.status, StatusArg::Incomplete);
    assert!(args.kind.is_none());
    assert!(!args.trashed);
    assert!(!args.items);
}

#[parameterized(
    incomplete = { "incomplete", StatusArg::Incomplete },
    completed = { "completed", StatusArg::Completed },
    canceled = { "canceled", StatusArg::Canceled },
    cancelled = { "cancelled", StatusArg::Canceled },
    any = { "any", StatusArg::Any },
)]
fn test_status_values(value: &str, expected: StatusArg) {
    assert_eq!(tasks_args(&["-s", value]).status, expected);
}

#[parameterized(
    todo = { "todo", KindArg::Todo },
    project = { "project", KindArg::Project },
    heading = { "heading", KindArg::Heading },
)]
fn test_type_values(value: &str, expected: KindArg) {
    assert_eq!(tasks_args(&["--type", value]).kind, Some(expected));
    assert_eq!(tasks_args(&["-t", value]).kind, Some(expected));
}

#[test]
fn test_status_any_disables_filter() {
    assert_eq!(StatusArg::Any.status(), None);
    assert_eq!(StatusArg::Completed.status(), Some(things_core::Status::Completed));
}

#[test]
fn test_date_expressions_keep_operators() {
    let args = tasks_args(&[
        "--deadline",
        "<=2024-06-30",
        "--start-date",
        "future",
        "--stop-date",
        ">2021-01-01",
    ]);
    assert_eq!(args.deadline.as_deref(), Some("<=2024-06-30"));
    assert_eq!(args.start_date.as_deref(), Some("future"));
    assert_eq!(args.stop_date.as_deref(), Some(">2021-01-01"));
}

#[test]
fn test_filters() {
    let args = tasks_args(&[
        "--start",
        "someday",
        "--area",
        "A-work",
        "--project",
        "P-launch",
        "--heading",
        "H-prep",
        "--tag",
        "Urgent",
        "-q",
        "milk",
        "--last",
        "2w",
        "--trashed",
        "--items",
    ]);
    assert_eq!(args.start, Some(StartArg::Someday));
    assert_eq!(args.area.as_deref(), Some("A-work"));
    assert_eq!(args.project.as_deref(), Some("P-launch"));
    assert_eq!(args.heading.as_deref(), Some("H-prep"));
    assert_eq!(args.tag.as_deref(), Some("Urgent"));
    assert_eq!(args.search.as_deref(), Some("milk"));
    assert_eq!(args.last.as_deref(), Some("2w"));
    assert!(args.trashed);
    assert!(args.items);
}

#[test]
fn test_unknown_status_rejected() {
    assert!(Cli::try_parse_from(["things", "tasks", "-s", "open"]).is_err());
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;

fn tags_args(args: &[&str]) -> TagsArgs {
    let argv = ["things", "tags"].iter().chain(args).copied();
    match Cli::try_parse_from(argv).unwrap().command {
        Command::Tags(args) => args,
        other => panic!("expected tags, got {other:?}"),
    }
}

#[test]
fn test_parent_and_items() {
    let args = tags_args(&["--parent", "G-office", "--items"]);
    assert_eq!(args.parent.as_deref(), Some("G-office"));
    assert!(!args.top_level);
    assert!(args.items);
}

#[test]
fn test_top_level() {
    assert!(tags_args(&["--top-level"]).top_level);
}

#[test]
fn test_parent_conflicts_with_top_level() {
    let result = Cli::try_parse_from(["things", "tags", "--parent", "G-office", "--top-level"]);
    assert!(result.is_err());
}

#[test]
fn test_areas_options() {
    let cli = Cli::try_parse_from(["things", "areas", "--tag", "Office", "--items"]).unwrap();
    match cli.command {
        Command::Areas(args) => {
            assert_eq!(args.tag.as_deref(), Some("Office"));
            assert!(args.items);
            assert!(args.uuid.is_none());
        }
        other => panic!("expected areas, got {other:?}"),
    }
}

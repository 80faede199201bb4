// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use yare::parameterized;

#[test]
fn test_global_options_after_subcommand() {
    let cli = Cli::try_parse_from([
        "things",
        "tasks",
        "--database",
        "/tmp/main.sqlite",
        "-o",
        "json",
        "--timeout",
        "250",
    ])
    .unwrap();
    assert_eq!(cli.database, Some(PathBuf::from("/tmp/main.sqlite")));
    assert_eq!(cli.output, Some(OutputFormat::Json));
    assert_eq!(cli.timeout, Some(250));
}

#[test]
fn test_global_options_default_to_none() {
    let cli = Cli::try_parse_from(["things", "areas"]).unwrap();
    assert!(cli.database.is_none());
    assert!(cli.output.is_none());
    assert!(cli.timeout.is_none());
}

#[parameterized(
    text = { "text", OutputFormat::Text },
    json = { "json", OutputFormat::Json },
)]
fn test_output_values(value: &str, expected: OutputFormat) {
    let cli = Cli::try_parse_from(["things", "--output", value, "tags"]).unwrap();
    assert_eq!(cli.output, Some(expected));
}

#[parameterized(
    bad_output = { &["things", "-o", "yaml", "tasks"] },
    bad_timeout = { &["things", "--timeout", "soon", "tasks"] },
    no_command = { &["things"] },
    show_without_uuid = { &["things", "show"] },
    unknown_command = { &["things", "add", "milk"] },
)]
fn test_rejected(args: &[&str]) {
    assert!(Cli::try_parse_from(args).is_err());
}

#[test]
fn test_show_parses_uuid_and_items() {
    let cli = Cli::try_parse_from(["things", "show", "T-copy", "--items"]).unwrap();
    match cli.command {
        Command::Show { uuid, items } => {
            assert_eq!(uuid, "T-copy");
            assert!(items);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[parameterized(
    show = { "show", ConfigCommand::Show },
    path = { "path", ConfigCommand::Path },
)]
fn test_config_subcommands(name: &str, expected: ConfigCommand) {
    let cli = Cli::try_parse_from(["things", "config", name]).unwrap();
    match cli.command {
        Command::Config(cmd) => assert_eq!(cmd, expected),
        other => panic!("expected config, got {other:?}"),
    }
}

#[test]
fn test_completion_shell() {
    let cli = Cli::try_parse_from(["things", "completion", "zsh"]).unwrap();
    assert!(matches!(cli.command, Command::Completion { shell: Shell::Zsh }));
}

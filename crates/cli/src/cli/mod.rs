// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use args::{AreasArgs, KindArg, StartArg, StatusArg, TagsArgs, TasksArgs};

/// Output format for query commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "things")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Read-only queries over the Things 3 database")]
#[command(styles = help::styles())]
pub struct Cli {
    /// Path to the Things database (overrides THINGSDB and the config file)
    #[arg(long, global = true, value_name = "path")]
    pub database: Option<PathBuf>,

    /// Output format [default: from config, else text]
    #[arg(long, short = 'o', global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Cancel queries that run longer than this many milliseconds
    #[arg(long, global = true, value_name = "ms")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List tasks, projects and headings
    #[command(after_help = colors::examples("\
Examples:
  things tasks                            Incomplete tasks
  things tasks --start inbox              Inbox
  things tasks --deadline past            Overdue tasks
  things tasks --deadline \"<=2024-06-30\"  Due by the end of June
  things tasks -s completed --last 1w     Completed, created this week
  things tasks --tag Errand -o json       Errands as JSON
  things tasks --type project --items     Projects with their contents"))]
    Tasks(TasksArgs),

    /// List areas
    Areas(AreasArgs),

    /// List tags
    Tags(TagsArgs),

    /// Show a single task by uuid
    #[command(arg_required_else_help = true)]
    Show {
        /// Task uuid
        uuid: String,

        /// Nest project and heading contents and checklists
        #[arg(long)]
        items: bool,
    },

    /// Show configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    #[command(after_help = colors::examples("\
Examples:
  things completion bash > ~/.local/share/bash-completion/completions/things
  things completion zsh > ~/.zfunc/_things
  things completion fish > ~/.config/fish/completions/things.fish"))]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;

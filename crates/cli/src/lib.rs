// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! thingsrs - command-line front end for the read-only Things 3 queries.
//!
//! The `things` binary is a thin wrapper around [`run`]; the query engine
//! itself lives in `things-core`.

mod cli;
pub mod colors;
mod commands;
pub mod config;
mod display;
pub mod env;
pub mod error;
mod help;
pub mod timings;

pub use cli::{Cli, Command, ConfigCommand, OutputFormat};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

use commands::Context;

/// Execute a parsed command line. Query commands open the database, run,
/// and close it again.
pub fn run(cli: Cli) -> Result<()> {
    let Cli {
        database,
        output,
        timeout,
        command,
    } = cli;

    let ctx = match command {
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "things", &mut std::io::stdout());
            return Ok(());
        }
        Command::Config(cmd) => return commands::config::run(cmd, database.as_deref(), output),
        Command::Tasks(args) => {
            let ctx = Context::open(database.as_deref(), output, timeout)?;
            commands::tasks::run(&ctx, &args)?;
            ctx
        }
        Command::Areas(args) => {
            let ctx = Context::open(database.as_deref(), output, timeout)?;
            commands::areas::run(&ctx, &args)?;
            ctx
        }
        Command::Tags(args) => {
            let ctx = Context::open(database.as_deref(), output, timeout)?;
            commands::tags::run(&ctx, &args)?;
            ctx
        }
        Command::Show { uuid, items } => {
            let ctx = Context::open(database.as_deref(), output, timeout)?;
            commands::show::run(&ctx, &uuid, items)?;
            ctx
        }
    };
    ctx.close()
}

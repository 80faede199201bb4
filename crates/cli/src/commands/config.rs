// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use crate::cli::{ConfigCommand, OutputFormat};
use crate::config::{config_path, resolve_database, Config};
use crate::env;
use crate::error::Result;

/// Execute a config subcommand.
pub fn run(
    cmd: ConfigCommand,
    database: Option<&Path>,
    output: Option<OutputFormat>,
) -> Result<()> {
    let path = config_path();
    match cmd {
        ConfigCommand::Path => println!("{}", path.display()),
        ConfigCommand::Show => {
            let config = Config::load(&path)?;
            let resolved = resolve_database(
                database,
                env::database(),
                &config,
                things_core::db::default_path,
            );
            let output = output.or(config.output).unwrap_or_default();
            match output {
                OutputFormat::Json => {
                    let json = serde_json::json!({
                        "config": path,
                        "database": resolved,
                        "output": output,
                    });
                    println!("{}", serde_json::to_string_pretty(&json)?);
                }
                OutputFormat::Text => {
                    println!("# {}", path.display());
                    if resolved.is_none() {
                        println!("# no Things database found");
                    }
                    let effective = Config {
                        database: resolved,
                        output: Some(output),
                    };
                    print!("{}", effective.to_toml()?);
                }
            }
        }
    }
    Ok(())
}

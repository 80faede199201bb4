// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod areas;
pub mod config;
pub mod show;
pub mod tags;
pub mod tasks;

use serde::Serialize;
use std::path::Path;
use std::time::Duration;
use things_core::{CancelToken, Database, DateInput};

use crate::cli::OutputFormat;
use crate::config::{config_path, resolve_database, Config};
use crate::display::Style;
use crate::env;
use crate::error::{Error, Result};

/// What every query command needs: an open database, the cancellation
/// token armed by `--timeout`, and the output settings.
pub struct Context {
    pub db: Database,
    pub token: CancelToken,
    pub output: OutputFormat,
    pub style: Style,
}

impl Context {
    pub fn open(
        database: Option<&Path>,
        output: Option<OutputFormat>,
        timeout: Option<u64>,
    ) -> Result<Self> {
        let config_file = config_path();
        let config = Config::load(&config_file)?;
        let path = resolve_database(
            database,
            env::database(),
            &config,
            things_core::db::default_path,
        )
        .ok_or_else(|| Error::NoDatabase(config_file.display().to_string()))?;

        let db = crate::time_phase!("db::open", { Database::open(&path)? });
        let token = CancelToken::new();
        if let Some(ms) = timeout {
            start_watchdog(token.clone(), ms)?;
        }

        Ok(Context {
            db,
            token,
            output: output.or(config.output).unwrap_or_default(),
            style: Style {
                color: crate::colors::should_colorize(),
            },
        })
    }

    /// Print `value` as JSON, or the lines produced by `text`.
    pub fn emit<T: Serialize + ?Sized>(
        &self,
        value: &T,
        text: impl FnOnce(Style) -> Vec<String>,
    ) -> Result<()> {
        match self.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
            OutputFormat::Text => {
                for line in text(self.style) {
                    println!("{line}");
                }
            }
        }
        Ok(())
    }

    pub fn close(self) -> Result<()> {
        self.db.close()?;
        Ok(())
    }
}

/// Cancel `token` once `ms` milliseconds have passed.
fn start_watchdog(token: CancelToken, ms: u64) -> Result<()> {
    if ms == 0 {
        return Err(Error::ZeroTimeout);
    }
    std::thread::Builder::new()
        .name("query-timeout".to_string())
        .spawn(move || {
            std::thread::sleep(Duration::from_millis(ms));
            tracing::warn!(timeout_ms = ms, "query timeout reached, cancelling");
            token.cancel();
        })?;
    Ok(())
}

/// Strictly parse an optional date expression from the command line.
pub fn date_arg(value: Option<&str>) -> Result<DateInput> {
    match value {
        Some(v) => Ok(DateInput::parse_strict(v)?),
        None => Ok(DateInput::Absent),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

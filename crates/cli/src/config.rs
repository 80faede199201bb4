// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration.
//!
//! Configuration is read from `~/.config/things/config.toml` (or
//! `$XDG_CONFIG_HOME/things/config.toml`, or `THINGS_CONFIG`) and includes:
//! - `database`: path of the Things database, `~/` is expanded
//! - `output`: default output format, `text` or `json`

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::env;
use crate::error::Result;

const CONFIG_DIR_NAME: &str = "things";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputFormat>,
}

impl Config {
    /// Load the config file. A missing file is an empty configuration.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content)?;
        config.database = config.database.map(|p| expand_home(&p));
        Ok(config)
    }

    /// Render as the contents of a config file.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Location of the config file.
pub fn config_path() -> PathBuf {
    if let Some(path) = env::config_file() {
        return path;
    }
    let base = env::xdg_config_home()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .unwrap_or_else(|| PathBuf::from(".config"));
    base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// Pick the database path: explicit flag, then `THINGSDB`, then the config
/// file, then the Things app container.
pub fn resolve_database(
    flag: Option<&Path>,
    env_path: Option<PathBuf>,
    config: &Config,
    discover: impl FnOnce() -> Option<PathBuf>,
) -> Option<PathBuf> {
    flag.map(Path::to_path_buf)
        .or(env_path)
        .or_else(|| config.database.clone())
        .or_else(discover)
}

fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

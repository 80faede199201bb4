// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only handle on the Things SQLite datastore.
//!
//! The connection is opened with `SQLITE_OPEN_READ_ONLY` and
//! `query_only`, so nothing in this crate can write to the user's data.
//! Statements run one at a time under a mutex and are registered with the
//! caller's [`CancelToken`] while they execute.

use rusqlite::types::Type;
use rusqlite::{Connection, OpenFlags, Row};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::cancel::CancelToken;
use crate::error::{Error, Result};

/// Group container of the Things 3 app, relative to the home directory.
pub const CONTAINER: &str = "Library/Group Containers/JLMPQHK86H.com.culturedcode.ThingsMac";

/// Database file inside each `ThingsData-*` directory of the container.
pub const DATABASE_FILE: &str = "Things Database.thingsdatabase/main.sqlite";

/// Separator used when a sub-select folds several titles into one column.
pub(crate) const LIST_SEPARATOR: char = '\u{1f}';

#[derive(Debug)]
pub struct Database {
    conn: Mutex<Connection>,
    path: PathBuf,
}

impl Database {
    /// Open an existing Things database read-only.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::DatabaseNotFound(path.display().to_string()));
        }
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        // Things keeps the database open while running; wait out its locks.
        conn.execute_batch(
            "PRAGMA query_only = ON;
             PRAGMA busy_timeout = 5000;",
        )?;
        tracing::info!(path = %path.display(), "opened things database");
        Ok(Database {
            conn: Mutex::new(conn),
            path: path.to_path_buf(),
        })
    }

    /// Open the database of the locally installed Things app.
    pub fn open_default() -> Result<Self> {
        match default_path() {
            Some(path) => Self::open(&path),
            None => Err(Error::DatabaseNotFound(format!("~/{CONTAINER}"))),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Close the connection, reporting any error SQLite raises on close.
    pub fn close(self) -> Result<()> {
        let conn = self
            .conn
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        conn.close().map_err(|(_, e)| Error::Database(e))?;
        tracing::info!(path = %self.path.display(), "closed things database");
        Ok(())
    }

    /// Run `sql` and map every row, observing `token`.
    ///
    /// Returns [`Error::Cancelled`] if the token was cancelled before the
    /// statement finished.
    pub(crate) fn query_rows<T, F>(&self, sql: &str, token: &CancelToken, map: F) -> Result<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        token.check()?;
        let conn = self.lock();
        let _registration = token.register(conn.get_interrupt_handle());
        tracing::debug!(sql, "executing query");

        settle(collect_rows(&conn, sql, map), token)
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn collect_rows<T, F>(conn: &Connection, sql: &str, map: F) -> rusqlite::Result<Vec<T>>
where
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], map)?;
    rows.collect()
}

/// Turn a finished statement into the caller's result. A cancelled token
/// discards rows even when the interrupt arrived before SQLite started
/// stepping and was lost.
fn settle<T>(result: rusqlite::Result<Vec<T>>, token: &CancelToken) -> Result<Vec<T>> {
    match result {
        Ok(_) if token.is_cancelled() => {
            tracing::warn!("query cancelled before it could be interrupted");
            Err(Error::Cancelled)
        }
        Ok(rows) => {
            tracing::debug!(rows = rows.len(), "query finished");
            Ok(rows)
        }
        Err(e) if token.is_cancelled() => {
            tracing::warn!(error = %e, "query interrupted by cancellation");
            Err(Error::Cancelled)
        }
        Err(e) => Err(e.into()),
    }
}

/// Locate the database of the locally installed Things app.
pub fn default_path() -> Option<PathBuf> {
    find_database(&dirs::home_dir()?.join(CONTAINER))
}

/// Find the first `ThingsData-*` database inside a Things group container.
///
/// Candidates are sorted by name so the result is stable when the container
/// holds leftovers from older installs.
pub fn find_database(container: &Path) -> Option<PathBuf> {
    let mut candidates: Vec<PathBuf> = fs::read_dir(container)
        .ok()?
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with("ThingsData-"))
        })
        .map(|entry| entry.path().join(DATABASE_FILE))
        .filter(|path| path.is_file())
        .collect();
    candidates.sort();
    candidates.into_iter().next()
}

/// Map an integer code column through `from_code`, reporting unknown codes
/// as corrupted data.
pub(crate) fn parse_code<T>(
    code: i64,
    idx: usize,
    column: &str,
    from_code: fn(i64) -> Option<T>,
) -> std::result::Result<T, rusqlite::Error> {
    from_code(code).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Integer,
            Box::new(Error::CorruptedData(format!(
                "invalid value '{code}' in column '{column}'"
            ))),
        )
    })
}

/// Split a folded title list, dropping blanks. Titles come back sorted.
pub(crate) fn split_list(value: Option<String>) -> Vec<String> {
    let mut items: Vec<String> = value
        .unwrap_or_default()
        .split(LIST_SEPARATOR)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    items.sort();
    items
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;

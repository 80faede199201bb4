// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for things-core operations.

use thiserror::Error;

/// All possible errors that can occur in things-core operations.
///
/// Filter construction never produces an error: malformed filter input
/// degrades to a no-op. Only strict parsing entry points, lookups and
/// statement execution fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid date: '{0}'\n  hint: expected YYYY-MM-DD")]
    Format(String),

    #[error("invalid date operator: '{0}'\n  hint: valid operators are: =, ==, <, <=, >, >=, exists, not-exists, future, past")]
    InvalidOperator(String),

    #[error("invalid task type: '{0}'\n  hint: valid types are: todo, project, heading")]
    InvalidTaskType(String),

    #[error("invalid status: '{0}'\n  hint: valid statuses are: incomplete, completed, canceled")]
    InvalidStatus(String),

    #[error("invalid start: '{0}'\n  hint: valid values are: inbox, anytime, someday")]
    InvalidStart(String),

    #[error("task not found: {0}")]
    TaskNotFound(String),

    #[error("area not found: {0}")]
    AreaNotFound(String),

    #[error("tag not found: {0}")]
    TagNotFound(String),

    #[error("query cancelled")]
    Cancelled,

    #[error("database not found: {0}\n  hint: set THINGSDB or pass --database")]
    DatabaseNotFound(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for things-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

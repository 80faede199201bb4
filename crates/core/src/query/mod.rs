// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fluent query builders for tasks, areas and tags.
//!
//! Each builder borrows the [`Database`], collects typed options, turns them
//! into [`Filter`](crate::filter::Filter)s in a fixed order and splices the
//! compiled condition into a fixed `SELECT`. Nothing runs until
//! `all()` or `first()` is called with a [`CancelToken`](crate::CancelToken).
//!
//! ```no_run
//! # fn main() -> things_core::Result<()> {
//! use things_core::{CancelToken, Database, DateInput};
//!
//! let db = Database::open_default()?;
//! let overdue = db
//!     .tasks()
//!     .deadline(DateInput::Past)
//!     .search("invoice")
//!     .all(&CancelToken::new())?;
//! # let _ = overdue;
//! # Ok(())
//! # }
//! ```

mod areas;
mod tags;
mod tasks;

pub use areas::AreasQuery;
pub use tags::TagsQuery;
pub use tasks::TasksQuery;

use crate::db::Database;

impl Database {
    /// Query `TMTask`. Defaults to incomplete, untrashed tasks outside
    /// trashed projects.
    pub fn tasks(&self) -> TasksQuery<'_> {
        TasksQuery::new(self)
    }

    pub fn areas(&self) -> AreasQuery<'_> {
        AreasQuery::new(self)
    }

    pub fn tags(&self) -> TagsQuery<'_> {
        TagsQuery::new(self)
    }
}

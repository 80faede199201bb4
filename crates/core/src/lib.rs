// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! things-core: read-only queries over the Things 3 database
//!
//! This crate provides the date codec for Things' packed date integers, a
//! small filter algebra that renders SQL `WHERE` fragments, and query
//! builders for tasks, areas and tags on top of a read-only connection.

pub mod area;
pub mod cancel;
pub mod dates;
pub mod db;
pub mod error;
pub mod filter;
pub mod query;
pub mod tag;
pub mod task;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use area::Area;
pub use cancel::CancelToken;
pub use db::Database;
pub use error::{Error, Result};
pub use filter::{DateEncoding, DateInput, DateOp, Filter, FilterBuilder, Value};
pub use query::{AreasQuery, TagsQuery, TasksQuery};
pub use tag::Tag;
pub use task::{ChecklistItem, Start, Status, Task, TaskType};

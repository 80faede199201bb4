// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Composable filters rendered to SQL `WHERE` fragments.
//!
//! A [`Filter`] describes one predicate. Filters that do not apply (an
//! absent value, an empty search, a malformed relative offset) render to the
//! empty string and are dropped by [`FilterBuilder`], which joins the rest
//! with `AND`:
//!
//! ```text
//! FilterBuilder::new()
//!     .truthy("TASK.trashed", false)          NOT IFNULL(TASK.trashed,0)
//!     .equal("TASK.status", Value::Int(0))    TASK.status = 0
//!     .search("", &["TASK.title"])            (dropped)
//!     .compile()
//!
//! => NOT IFNULL(TASK.trashed,0) AND TASK.status = 0
//! ```
//!
//! Filters build raw SQL text; every string literal goes through
//! [`quote`] which doubles embedded single quotes.

mod builder;
mod expr;
mod input;
mod render;

pub use builder::FilterBuilder;
pub use expr::{DateEncoding, DateOp, Filter, Value};
pub use input::DateInput;
pub use render::quote;

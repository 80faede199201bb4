// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter value types.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

use super::input::DateInput;

/// A single predicate over one or more columns.
///
/// Filters are immutable once built. Rendering lives in `render.rs`.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Raw SQL, rendered verbatim.
    Static(String),
    /// Equality or NULL check against an optional value.
    Equal {
        column: String,
        value: Option<Value>,
    },
    /// Column used as a boolean.
    Truthy { column: String, value: Option<bool> },
    /// Parenthesized OR of the non-empty members.
    Or(Vec<Filter>),
    /// `LIKE '%query%'` over each column, OR'd together.
    Search { query: String, columns: Vec<String> },
    /// Comparison on a packed Things date column.
    ThingsDate {
        column: String,
        op: DateOp,
        date: Option<String>,
    },
    /// Comparison on a Unix-seconds column, at day granularity in local time.
    UnixDate {
        column: String,
        op: DateOp,
        date: Option<String>,
    },
    /// Unix-seconds column newer than `now - offset`, where offset is
    /// `<N>d`, `<N>w` or `<N>y`.
    UnixRange { column: String, offset: String },
    /// Date input decided at the query boundary.
    Parsed {
        column: String,
        input: DateInput,
        encoding: DateEncoding,
    },
}

impl Filter {
    pub fn static_sql(sql: impl Into<String>) -> Self {
        Filter::Static(sql.into())
    }

    pub fn equal(column: impl Into<String>, value: impl Into<Option<Value>>) -> Self {
        Filter::Equal {
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn truthy(column: impl Into<String>, value: impl Into<Option<bool>>) -> Self {
        Filter::Truthy {
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn or(filters: impl IntoIterator<Item = Filter>) -> Self {
        Filter::Or(filters.into_iter().collect())
    }

    pub fn search(query: impl Into<String>, columns: &[&str]) -> Self {
        Filter::Search {
            query: query.into(),
            columns: columns.iter().map(|c| (*c).to_string()).collect(),
        }
    }

    pub fn things_date(column: impl Into<String>, op: DateOp, date: Option<&str>) -> Self {
        Filter::ThingsDate {
            column: column.into(),
            op,
            date: date.map(str::to_string),
        }
    }

    pub fn unix_date(column: impl Into<String>, op: DateOp, date: Option<&str>) -> Self {
        Filter::UnixDate {
            column: column.into(),
            op,
            date: date.map(str::to_string),
        }
    }

    pub fn unix_range(column: impl Into<String>, offset: impl Into<String>) -> Self {
        Filter::UnixRange {
            column: column.into(),
            offset: offset.into(),
        }
    }

    pub fn parsed(column: impl Into<String>, input: DateInput, encoding: DateEncoding) -> Self {
        Filter::Parsed {
            column: column.into(),
            input,
            encoding,
        }
    }
}

/// A typed value for [`Filter::Equal`].
///
/// `Bool` is an existence check rather than a comparison: `true` means the
/// column is set, `false` that it is NULL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    Text(String),
    Int(i64),
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

/// Operators for date filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOp {
    /// Column is set (`IS NOT NULL`).
    Exists,
    /// Column is NULL.
    NotExists,
    /// Strictly after now.
    Future,
    /// Now or earlier.
    Past,
    Eq,
    Lt,
    Le,
    Gt,
    Ge,
}

impl DateOp {
    /// SQL symbol for comparison operators, `None` for the others.
    pub fn comparison_symbol(&self) -> Option<&'static str> {
        match self {
            DateOp::Eq => Some("="),
            DateOp::Lt => Some("<"),
            DateOp::Le => Some("<="),
            DateOp::Gt => Some(">"),
            DateOp::Ge => Some(">="),
            DateOp::Exists | DateOp::NotExists | DateOp::Future | DateOp::Past => None,
        }
    }

    /// Returns true for operators that need a date to compare against.
    pub fn is_comparison(&self) -> bool {
        self.comparison_symbol().is_some()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DateOp::Exists => "exists",
            DateOp::NotExists => "not-exists",
            DateOp::Future => "future",
            DateOp::Past => "past",
            DateOp::Eq => "=",
            DateOp::Lt => "<",
            DateOp::Le => "<=",
            DateOp::Gt => ">",
            DateOp::Ge => ">=",
        }
    }
}

impl fmt::Display for DateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DateOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "=" | "==" => Ok(DateOp::Eq),
            "<" => Ok(DateOp::Lt),
            "<=" => Ok(DateOp::Le),
            ">" => Ok(DateOp::Gt),
            ">=" => Ok(DateOp::Ge),
            "exists" => Ok(DateOp::Exists),
            "not-exists" => Ok(DateOp::NotExists),
            "future" => Ok(DateOp::Future),
            "past" => Ok(DateOp::Past),
            _ => Err(Error::InvalidOperator(s.to_string())),
        }
    }
}

/// How a date column is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateEncoding {
    /// Packed Things date integer.
    Things,
    /// Unix seconds.
    Unix,
}

#[cfg(test)]
#[path = "expr_tests.rs"]
mod tests;

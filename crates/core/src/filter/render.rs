// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering of filters to SQL.
//!
//! `to_sql` and `is_empty` must agree: a filter is empty exactly when it
//! renders to `""`. [`FilterBuilder`](super::FilterBuilder) relies on this to
//! avoid dangling `AND`s.

use chrono::NaiveDate;

use crate::dates::{encode_date, parse_iso, today_sql};

use super::expr::{DateEncoding, DateOp, Filter, Value};
use super::input::DateInput;

/// Quote a string as an SQL literal, doubling embedded single quotes.
pub fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

impl Filter {
    /// Render this filter as an SQL boolean expression, or `""` when it
    /// does not apply.
    pub fn to_sql(&self) -> String {
        match self {
            Filter::Static(sql) => sql.clone(),
            Filter::Equal { column, value } => match value {
                None => String::new(),
                Some(Value::Bool(true)) => format!("{column} IS NOT NULL"),
                Some(Value::Bool(false)) => format!("{column} IS NULL"),
                Some(Value::Text(s)) => format!("{column} = {}", quote(s)),
                Some(Value::Int(n)) => format!("{column} = {n}"),
            },
            Filter::Truthy { column, value } => match value {
                None => String::new(),
                Some(true) => column.clone(),
                Some(false) => format!("NOT IFNULL({column},0)"),
            },
            Filter::Or(members) => {
                let parts: Vec<String> = members
                    .iter()
                    .map(Filter::to_sql)
                    .filter(|sql| !sql.is_empty())
                    .collect();
                if parts.is_empty() {
                    String::new()
                } else {
                    format!("({})", parts.join(" OR "))
                }
            }
            Filter::Search { query, columns } => {
                if query.is_empty() || columns.is_empty() {
                    return String::new();
                }
                let pattern = quote(&format!("%{query}%"));
                let parts: Vec<String> = columns
                    .iter()
                    .map(|column| format!("{column} LIKE {pattern}"))
                    .collect();
                format!("({})", parts.join(" OR "))
            }
            Filter::ThingsDate { column, op, date } => {
                date_sql(column, *op, parse_date(date), DateEncoding::Things)
            }
            Filter::UnixDate { column, op, date } => {
                date_sql(column, *op, parse_date(date), DateEncoding::Unix)
            }
            Filter::UnixRange { column, offset } => match range_modifier(offset) {
                Some(modifier) => format!(
                    "datetime({column}, 'unixepoch', 'localtime') > datetime('now', 'localtime', '{modifier}')"
                ),
                None => String::new(),
            },
            Filter::Parsed {
                column,
                input,
                encoding,
            } => match input {
                DateInput::Absent => String::new(),
                DateInput::Exists(true) => date_sql(column, DateOp::Exists, None, *encoding),
                DateInput::Exists(false) => date_sql(column, DateOp::NotExists, None, *encoding),
                DateInput::Future => date_sql(column, DateOp::Future, None, *encoding),
                DateInput::Past => date_sql(column, DateOp::Past, None, *encoding),
                DateInput::Exact { op, date } => date_sql(column, *op, Some(*date), *encoding),
            },
        }
    }

    /// Returns true when this filter renders to `""`.
    pub fn is_empty(&self) -> bool {
        match self {
            Filter::Static(sql) => sql.is_empty(),
            Filter::Equal { value, .. } => value.is_none(),
            Filter::Truthy { value, .. } => value.is_none(),
            Filter::Or(members) => members.iter().all(Filter::is_empty),
            Filter::Search { query, columns } => query.is_empty() || columns.is_empty(),
            Filter::ThingsDate { op, date, .. } | Filter::UnixDate { op, date, .. } => {
                op.is_comparison() && parse_date(date).is_none()
            }
            Filter::UnixRange { offset, .. } => range_modifier(offset).is_none(),
            Filter::Parsed { input, .. } => input.is_absent(),
        }
    }
}

fn parse_date(date: &Option<String>) -> Option<NaiveDate> {
    date.as_deref().and_then(parse_iso)
}

/// Render one date predicate. Comparison operators without a date render
/// `""`; the other operators ignore `date`.
fn date_sql(column: &str, op: DateOp, date: Option<NaiveDate>, encoding: DateEncoding) -> String {
    match op {
        DateOp::Exists => format!("{column} IS NOT NULL"),
        DateOp::NotExists => format!("{column} IS NULL"),
        DateOp::Future | DateOp::Past => {
            // Past includes now so every moment lands in exactly one bucket.
            let symbol = if op == DateOp::Future { ">" } else { "<=" };
            match encoding {
                DateEncoding::Things => format!("{column} {symbol} {}", today_sql()),
                DateEncoding::Unix => format!(
                    "{} {symbol} date('now', 'localtime')",
                    unix_date_expr(column)
                ),
            }
        }
        DateOp::Eq | DateOp::Lt | DateOp::Le | DateOp::Gt | DateOp::Ge => {
            let (Some(symbol), Some(date)) = (op.comparison_symbol(), date) else {
                return String::new();
            };
            match encoding {
                DateEncoding::Things => format!("{column} {symbol} {}", encode_date(date)),
                DateEncoding::Unix => format!(
                    "{} {symbol} '{}'",
                    unix_date_expr(column),
                    date.format("%Y-%m-%d")
                ),
            }
        }
    }
}

fn unix_date_expr(column: &str) -> String {
    format!("date({column}, 'unixepoch', 'localtime')")
}

/// Translate a `<N><unit>` offset into an SQLite date modifier.
///
/// Units are `d` (days), `w` (weeks, as days) and `y` (years). Anything
/// else yields `None`.
fn range_modifier(offset: &str) -> Option<String> {
    let unit = offset.chars().last()?;
    let digits = &offset[..offset.len() - unit.len_utf8()];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n: u64 = digits.parse().ok()?;
    match unit {
        'd' => Some(format!("-{n} days")),
        'w' => Some(format!("-{} days", n.checked_mul(7)?)),
        'y' => Some(format!("-{n} years")),
        _ => None,
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Date filter input from loosely-typed callers.
//!
//! Callers hand date filters over as text (`"future"`, `">=2024-01-01"`) or
//! booleans (has a deadline or not). The shape is decided once, here, so
//! rendering never has to inspect raw input.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

use crate::dates::parse_iso;
use crate::error::{Error, Result};

use super::expr::DateOp;

// Optional comparison operator followed by an ISO date.
static OP_DATE_RE: LazyLock<Regex> =
    LazyLock::new(
        || match Regex::new(r"^(=|==|<|<=|>|>=)?(\d{4}-\d{2}-\d{2})$") {
            Ok(re) => re,
            Err(_) => unreachable!("static regex pattern"),
        },
    );

/// A date filter decided at the query boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateInput {
    /// No filter.
    #[default]
    Absent,
    /// `true`: the date is set. `false`: the date is NULL.
    Exists(bool),
    /// Strictly after now.
    Future,
    /// Now or earlier.
    Past,
    /// Comparison against a concrete date.
    Exact { op: DateOp, date: NaiveDate },
}

impl DateInput {
    /// Parse permissively: anything unrecognised is [`DateInput::Absent`].
    ///
    /// Accepts `""`, `"future"`, `"past"` and `[op]YYYY-MM-DD` where `op` is
    /// one of `=`, `==`, `<`, `<=`, `>`, `>=` (default `==`).
    pub fn parse(s: &str) -> Self {
        Self::parse_strict(s).unwrap_or(DateInput::Absent)
    }

    /// Parse with the same grammar as [`DateInput::parse`], but reject
    /// malformed input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] when `s` is non-empty and matches none of
    /// the accepted forms, or names an impossible calendar day.
    pub fn parse_strict(s: &str) -> Result<Self> {
        match s {
            "" => return Ok(DateInput::Absent),
            "future" => return Ok(DateInput::Future),
            "past" => return Ok(DateInput::Past),
            _ => {}
        }

        let caps = OP_DATE_RE
            .captures(s)
            .ok_or_else(|| Error::Format(s.to_string()))?;
        let op = match caps.get(1) {
            Some(m) => m.as_str().parse()?,
            None => DateOp::Eq,
        };
        let date = caps
            .get(2)
            .and_then(|m| parse_iso(m.as_str()))
            .ok_or_else(|| Error::Format(s.to_string()))?;
        Ok(DateInput::Exact { op, date })
    }

    /// Returns true when this input filters nothing.
    pub fn is_absent(&self) -> bool {
        matches!(self, DateInput::Absent)
    }
}

impl From<bool> for DateInput {
    fn from(exists: bool) -> Self {
        DateInput::Exists(exists)
    }
}

impl From<Option<bool>> for DateInput {
    fn from(exists: Option<bool>) -> Self {
        exists.map_or(DateInput::Absent, DateInput::Exists)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Exact {
            op: DateOp::Eq,
            date,
        }
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;

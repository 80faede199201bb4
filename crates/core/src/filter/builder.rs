// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered accumulation of filters into a `WHERE` clause.

use std::fmt;

use super::expr::{DateEncoding, DateOp, Filter, Value};
use super::input::DateInput;

/// Collects filters in call order and compiles them into one condition.
///
/// Filters on the same column are not merged or checked for conflicts;
/// each one is an independent `AND` term.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterBuilder {
    filters: Vec<Filter>,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a prebuilt filter.
    #[must_use]
    pub fn add(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    #[must_use]
    pub fn static_sql(self, sql: impl Into<String>) -> Self {
        self.add(Filter::static_sql(sql))
    }

    #[must_use]
    pub fn equal(self, column: impl Into<String>, value: impl Into<Option<Value>>) -> Self {
        self.add(Filter::equal(column, value))
    }

    #[must_use]
    pub fn truthy(self, column: impl Into<String>, value: impl Into<Option<bool>>) -> Self {
        self.add(Filter::truthy(column, value))
    }

    #[must_use]
    pub fn or(self, filters: impl IntoIterator<Item = Filter>) -> Self {
        self.add(Filter::or(filters))
    }

    #[must_use]
    pub fn search(self, query: impl Into<String>, columns: &[&str]) -> Self {
        self.add(Filter::search(query, columns))
    }

    #[must_use]
    pub fn things_date(self, column: impl Into<String>, op: DateOp, date: Option<&str>) -> Self {
        self.add(Filter::things_date(column, op, date))
    }

    #[must_use]
    pub fn unix_date(self, column: impl Into<String>, op: DateOp, date: Option<&str>) -> Self {
        self.add(Filter::unix_date(column, op, date))
    }

    #[must_use]
    pub fn unix_range(self, column: impl Into<String>, offset: impl Into<String>) -> Self {
        self.add(Filter::unix_range(column, offset))
    }

    #[must_use]
    pub fn parsed(
        self,
        column: impl Into<String>,
        input: DateInput,
        encoding: DateEncoding,
    ) -> Self {
        self.add(Filter::parsed(column, input, encoding))
    }

    /// Join the non-empty filters with `AND`, or `TRUE` if there are none.
    pub fn compile(&self) -> String {
        let parts: Vec<String> = self
            .filters
            .iter()
            .filter(|f| !f.is_empty())
            .map(Filter::to_sql)
            .collect();
        if parts.is_empty() {
            "TRUE".to_string()
        } else {
            parts.join(" AND ")
        }
    }
}

impl fmt::Display for FilterBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.compile())
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tag queries over `TMTag`.

use rusqlite::Row;

use crate::cancel::CancelToken;
use crate::db::Database;
use crate::error::{Error, Result};
use crate::filter::{FilterBuilder, Value};
use crate::tag::Tag;

const TAGS_SELECT: &str = r#"SELECT
    TAG.uuid,
    TAG.title,
    TAG.shortcut,
    TAG.parent
FROM TMTag AS TAG"#;

#[derive(Debug, Clone)]
pub struct TagsQuery<'db> {
    db: &'db Database,
    uuid: Option<String>,
    title: Option<String>,
    parent: Option<Value>,
    include_items: bool,
}

impl<'db> TagsQuery<'db> {
    pub fn new(db: &'db Database) -> Self {
        TagsQuery {
            db,
            uuid: None,
            title: None,
            parent: None,
            include_items: false,
        }
    }

    #[must_use]
    pub fn uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = Some(uuid.into());
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Parent tag uuid, or a bool: `false` selects top-level tags.
    #[must_use]
    pub fn parent(mut self, parent: impl Into<Value>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Attach the areas and tasks carrying each tag.
    #[must_use]
    pub fn include_items(mut self, include: bool) -> Self {
        self.include_items = include;
        self
    }

    pub fn where_clause(&self) -> String {
        FilterBuilder::new()
            .equal("TAG.uuid", self.uuid.clone().map(Value::Text))
            .equal("TAG.title", self.title.clone().map(Value::Text))
            .equal("TAG.parent", self.parent.clone())
            .compile()
    }

    pub fn sql(&self) -> String {
        format!(
            "{TAGS_SELECT}\nWHERE {}\nORDER BY TAG.\"index\"",
            self.where_clause()
        )
    }

    pub fn all(&self, token: &CancelToken) -> Result<Vec<Tag>> {
        let mut tags = self.db.query_rows(&self.sql(), token, tag_from_row)?;
        if self.include_items {
            for tag in &mut tags {
                tag.areas = self.db.areas().tag(tag.title.as_str()).all(token)?;
                tag.tasks = self.db.tasks().tag(tag.title.as_str()).all(token)?;
            }
        }
        Ok(tags)
    }

    pub fn first(&self, token: &CancelToken) -> Result<Tag> {
        self.all(token)?.into_iter().next().ok_or_else(|| {
            Error::TagNotFound(
                self.uuid
                    .clone()
                    .or_else(|| self.title.clone())
                    .unwrap_or_else(|| self.where_clause()),
            )
        })
    }
}

fn tag_from_row(row: &Row<'_>) -> rusqlite::Result<Tag> {
    Ok(Tag {
        uuid: row.get(0)?,
        title: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        shortcut: row.get::<_, Option<String>>(2)?.filter(|s| !s.is_empty()),
        parent: row.get(3)?,
        areas: Vec::new(),
        tasks: Vec::new(),
    })
}

#[cfg(test)]
#[path = "tags_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Area queries over `TMArea`.

use rusqlite::Row;

use crate::area::Area;
use crate::cancel::CancelToken;
use crate::db::{split_list, Database};
use crate::error::{Error, Result};
use crate::filter::{FilterBuilder, Value};

const AREAS_SELECT: &str = r#"SELECT DISTINCT
    AREA.uuid,
    AREA.title,
    AREA.visible,
    (SELECT GROUP_CONCAT(TAG_TITLE.title, char(31))
        FROM TMAreaTag AREA_TAG
        JOIN TMTag TAG_TITLE ON TAG_TITLE.uuid = AREA_TAG.tags
        WHERE AREA_TAG.areas = AREA.uuid) AS tags,
    AREA."index"
FROM TMArea AS AREA
LEFT OUTER JOIN TMAreaTag AREA_TAGS ON AREA_TAGS.areas = AREA.uuid
LEFT OUTER JOIN TMTag TAG ON TAG.uuid = AREA_TAGS.tags"#;

#[derive(Debug, Clone)]
pub struct AreasQuery<'db> {
    db: &'db Database,
    uuid: Option<String>,
    title: Option<String>,
    tag: Option<Value>,
    include_items: bool,
}

impl<'db> AreasQuery<'db> {
    pub fn new(db: &'db Database) -> Self {
        AreasQuery {
            db,
            uuid: None,
            title: None,
            tag: None,
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

    /// Tag title, or a bool for "has any tag".
    #[must_use]
    pub fn tag(mut self, tag: impl Into<Value>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Attach the tasks filed in each area.
    #[must_use]
    pub fn include_items(mut self, include: bool) -> Self {
        self.include_items = include;
        self
    }

    pub fn where_clause(&self) -> String {
        FilterBuilder::new()
            .equal("AREA.uuid", self.uuid.clone().map(Value::Text))
            .equal("AREA.title", self.title.clone().map(Value::Text))
            .equal("TAG.title", self.tag.clone())
            .compile()
    }

    pub fn sql(&self) -> String {
        format!(
            "{AREAS_SELECT}\nWHERE {}\nORDER BY AREA.\"index\"",
            self.where_clause()
        )
    }

    pub fn all(&self, token: &CancelToken) -> Result<Vec<Area>> {
        let mut areas = self.db.query_rows(&self.sql(), token, area_from_row)?;
        if self.include_items {
            for area in &mut areas {
                area.items = self
                    .db
                    .tasks()
                    .area(area.uuid.as_str())
                    .include_items(true)
                    .all(token)?;
            }
        }
        Ok(areas)
    }

    pub fn first(&self, token: &CancelToken) -> Result<Area> {
        self.all(token)?.into_iter().next().ok_or_else(|| {
            Error::AreaNotFound(
                self.uuid
                    .clone()
                    .or_else(|| self.title.clone())
                    .unwrap_or_else(|| self.where_clause()),
            )
        })
    }
}

fn area_from_row(row: &Row<'_>) -> rusqlite::Result<Area> {
    Ok(Area {
        uuid: row.get(0)?,
        title: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        // Things leaves `visible` NULL for areas that were never hidden.
        visible: row.get::<_, Option<bool>>(2)?.unwrap_or(true),
        tags: split_list(row.get(3)?),
        items: Vec::new(),
    })
}

#[cfg(test)]
#[path = "areas_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Task queries over `TMTask`.

use rusqlite::Row;

use crate::cancel::CancelToken;
use crate::dates::{decode_date, decode_time, decode_unix};
use crate::db::{parse_code, split_list, Database};
use crate::error::{Error, Result};
use crate::filter::{DateEncoding, DateInput, Filter, FilterBuilder, Value};
use crate::task::{ChecklistItem, Start, Status, Task, TaskType};

/// Task rows with their area, project and heading titles.
///
/// `PROJECT_OF_HEADING` resolves the project a heading belongs to, which is
/// where a to-do under a heading inherits its trashed state from. `TAG` is
/// joined for tag filters only; the tag list itself comes from the
/// sub-select so filtering never multiplies rows.
const TASKS_SELECT: &str = r#"SELECT DISTINCT
    TASK.uuid,
    TASK.type,
    TASK.title,
    TASK.status,
    TASK.start,
    TASK.notes,
    TASK.startDate,
    TASK.deadline,
    TASK.reminderTime,
    TASK.stopDate,
    TASK.creationDate,
    TASK.userModificationDate,
    TASK.area,
    AREA.title,
    TASK.project,
    PROJECT.title,
    TASK.heading,
    HEADING.title,
    TASK.trashed,
    (SELECT GROUP_CONCAT(TAG_TITLE.title, char(31))
        FROM TMTaskTag TASK_TAG
        JOIN TMTag TAG_TITLE ON TAG_TITLE.uuid = TASK_TAG.tags
        WHERE TASK_TAG.tasks = TASK.uuid) AS tags,
    TASK."index"
FROM TMTask AS TASK
LEFT OUTER JOIN TMTask PROJECT ON TASK.project = PROJECT.uuid
LEFT OUTER JOIN TMArea AREA ON TASK.area = AREA.uuid
LEFT OUTER JOIN TMTask HEADING ON TASK.heading = HEADING.uuid
LEFT OUTER JOIN TMTask PROJECT_OF_HEADING ON HEADING.project = PROJECT_OF_HEADING.uuid
LEFT OUTER JOIN TMTaskTag TAGS ON TASK.uuid = TAGS.tasks
LEFT OUTER JOIN TMTag TAG ON TAGS.tags = TAG.uuid"#;

const CHECKLIST_SELECT: &str = r#"SELECT uuid, title, status, stopDate
FROM TMChecklistItem"#;

const SEARCH_COLUMNS: &[&str] = &["TASK.title", "TASK.notes", "AREA.title"];

/// Builder for task queries.
///
/// Unset options add no condition. `area`, `project`, `heading` and `tag`
/// take either an identifier (a uuid, or a title for tags) or a bool that
/// only checks whether the task has one.
#[derive(Debug, Clone)]
pub struct TasksQuery<'db> {
    db: &'db Database,
    trashed: Option<bool>,
    context_trashed: Option<bool>,
    kind: Option<TaskType>,
    uuid: Option<String>,
    status: Option<Status>,
    start: Option<Start>,
    area: Option<Value>,
    project: Option<Value>,
    heading: Option<Value>,
    tag: Option<Value>,
    deadline_suppressed: Option<bool>,
    start_date: DateInput,
    stop_date: DateInput,
    deadline: DateInput,
    search: String,
    last: String,
    include_items: bool,
}

impl<'db> TasksQuery<'db> {
    pub fn new(db: &'db Database) -> Self {
        TasksQuery {
            db,
            trashed: Some(false),
            context_trashed: Some(false),
            kind: None,
            uuid: None,
            status: Some(Status::Incomplete),
            start: None,
            area: None,
            project: None,
            heading: None,
            tag: None,
            deadline_suppressed: None,
            start_date: DateInput::Absent,
            stop_date: DateInput::Absent,
            deadline: DateInput::Absent,
            search: String::new(),
            last: String::new(),
            include_items: false,
        }
    }

    /// `Some(true)` selects only trashed tasks, `None` ignores trash.
    #[must_use]
    pub fn trashed(mut self, trashed: impl Into<Option<bool>>) -> Self {
        self.trashed = trashed.into();
        self
    }

    /// Filter on the trashed state of the task's project, or of the project
    /// its heading belongs to.
    #[must_use]
    pub fn context_trashed(mut self, trashed: impl Into<Option<bool>>) -> Self {
        self.context_trashed = trashed.into();
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: impl Into<Option<TaskType>>) -> Self {
        self.kind = kind.into();
        self
    }

    #[must_use]
    pub fn uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = Some(uuid.into());
        self
    }

    /// `None` matches every status.
    #[must_use]
    pub fn status(mut self, status: impl Into<Option<Status>>) -> Self {
        self.status = status.into();
        self
    }

    #[must_use]
    pub fn start(mut self, start: impl Into<Option<Start>>) -> Self {
        self.start = start.into();
        self
    }

    #[must_use]
    pub fn area(mut self, area: impl Into<Value>) -> Self {
        self.area = Some(area.into());
        self
    }

    #[must_use]
    pub fn project(mut self, project: impl Into<Value>) -> Self {
        self.project = Some(project.into());
        self
    }

    #[must_use]
    pub fn heading(mut self, heading: impl Into<Value>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// Tag title, or a bool for "has any tag".
    #[must_use]
    pub fn tag(mut self, tag: impl Into<Value>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    #[must_use]
    pub fn deadline_suppressed(mut self, suppressed: impl Into<Option<bool>>) -> Self {
        self.deadline_suppressed = suppressed.into();
        self
    }

    #[must_use]
    pub fn start_date(mut self, input: impl Into<DateInput>) -> Self {
        self.start_date = input.into();
        self
    }

    /// Completion or cancellation date.
    #[must_use]
    pub fn stop_date(mut self, input: impl Into<DateInput>) -> Self {
        self.stop_date = input.into();
        self
    }

    #[must_use]
    pub fn deadline(mut self, input: impl Into<DateInput>) -> Self {
        self.deadline = input.into();
        self
    }

    /// Case-insensitive substring search over title, notes and area title.
    #[must_use]
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = query.into();
        self
    }

    /// Only tasks created within the offset, e.g. `3d`, `2w` or `1y`.
    #[must_use]
    pub fn last(mut self, offset: impl Into<String>) -> Self {
        self.last = offset.into();
        self
    }

    /// Attach headings and to-dos to projects, to-dos to headings and
    /// checklist items to to-dos. Does not change which rows match.
    #[must_use]
    pub fn include_items(mut self, include: bool) -> Self {
        self.include_items = include;
        self
    }

    /// The compiled `WHERE` condition.
    pub fn where_clause(&self) -> String {
        let builder = FilterBuilder::new().truthy("TASK.trashed", self.trashed);
        let builder = match self.context_trashed {
            Some(true) => builder.or([
                Filter::truthy("PROJECT.trashed", true),
                Filter::truthy("PROJECT_OF_HEADING.trashed", true),
            ]),
            Some(false) => builder
                .truthy("PROJECT.trashed", false)
                .truthy("PROJECT_OF_HEADING.trashed", false),
            None => builder,
        };
        builder
            .equal("TASK.type", self.kind.map(|k| Value::Int(k.code())))
            .equal("TASK.uuid", self.uuid.clone().map(Value::Text))
            .equal("TASK.status", self.status.map(|s| Value::Int(s.code())))
            .equal("TASK.start", self.start.map(|s| Value::Int(s.code())))
            .equal("TASK.area", self.area.clone())
            .equal("TASK.project", self.project.clone())
            .equal("TASK.heading", self.heading.clone())
            .equal("TAG.title", self.tag.clone())
            .truthy("TASK.deadlineSuppressionDate", self.deadline_suppressed)
            .parsed("TASK.startDate", self.start_date, DateEncoding::Things)
            .parsed("TASK.stopDate", self.stop_date, DateEncoding::Unix)
            .parsed("TASK.deadline", self.deadline, DateEncoding::Things)
            .search(self.search.as_str(), SEARCH_COLUMNS)
            .unix_range("TASK.creationDate", self.last.as_str())
            .compile()
    }

    /// The full statement `all()` executes.
    pub fn sql(&self) -> String {
        self.statement(None)
    }

    pub fn all(&self, token: &CancelToken) -> Result<Vec<Task>> {
        self.run(&self.statement(None), token)
    }

    /// The first matching task in list order.
    pub fn first(&self, token: &CancelToken) -> Result<Task> {
        self.run(&self.statement(Some(1)), token)?
            .into_iter()
            .next()
            .ok_or_else(|| {
                Error::TaskNotFound(self.uuid.clone().unwrap_or_else(|| self.where_clause()))
            })
    }

    fn statement(&self, limit: Option<usize>) -> String {
        let sql = format!(
            "{TASKS_SELECT}\nWHERE {}\nORDER BY TASK.\"index\"",
            self.where_clause()
        );
        match limit {
            Some(n) => format!("{sql}\nLIMIT {n}"),
            None => sql,
        }
    }

    fn run(&self, sql: &str, token: &CancelToken) -> Result<Vec<Task>> {
        let mut tasks = self.db.query_rows(sql, token, task_from_row)?;
        if self.include_items {
            for task in &mut tasks {
                self.load_items(task, token)?;
            }
        }
        Ok(tasks)
    }

    fn load_items(&self, task: &mut Task, token: &CancelToken) -> Result<()> {
        match task.kind {
            TaskType::Project => {
                task.items = self.children().project(task.uuid.as_str()).all(token)?;
            }
            TaskType::Heading => {
                task.items = self.children().heading(task.uuid.as_str()).all(token)?;
            }
            TaskType::Todo => {
                task.checklist = checklist(self.db, &task.uuid, token)?;
            }
        }
        Ok(())
    }

    /// Nested queries keep the status and trash options of the parent.
    fn children(&self) -> TasksQuery<'db> {
        TasksQuery {
            trashed: self.trashed,
            context_trashed: self.context_trashed,
            status: self.status,
            include_items: true,
            ..TasksQuery::new(self.db)
        }
    }
}

fn checklist(db: &Database, task: &str, token: &CancelToken) -> Result<Vec<ChecklistItem>> {
    let sql = format!(
        "{CHECKLIST_SELECT}\nWHERE {}\nORDER BY \"index\"",
        FilterBuilder::new().equal("task", Value::from(task)).compile()
    );
    db.query_rows(&sql, token, |row| {
        Ok(ChecklistItem {
            uuid: row.get(0)?,
            title: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            status: parse_code(row.get(2)?, 2, "status", Status::from_code)?,
            stop_date: row.get::<_, Option<f64>>(3)?.and_then(decode_unix),
        })
    })
}

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        uuid: row.get(0)?,
        kind: parse_code(row.get(1)?, 1, "type", TaskType::from_code)?,
        title: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        status: parse_code(row.get(3)?, 3, "status", Status::from_code)?,
        start: parse_code(row.get(4)?, 4, "start", Start::from_code)?,
        notes: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
        start_date: row.get::<_, Option<i64>>(6)?.and_then(decode_date),
        deadline: row.get::<_, Option<i64>>(7)?.and_then(decode_date),
        reminder_time: row.get::<_, Option<i64>>(8)?.and_then(decode_time),
        stop_date: row.get::<_, Option<f64>>(9)?.and_then(decode_unix),
        created: row.get::<_, Option<f64>>(10)?.and_then(decode_unix),
        modified: row.get::<_, Option<f64>>(11)?.and_then(decode_unix),
        area: row.get(12)?,
        area_title: row.get(13)?,
        project: row.get(14)?,
        project_title: row.get(15)?,
        heading: row.get(16)?,
        heading_title: row.get(17)?,
        trashed: row.get::<_, Option<bool>>(18)?.unwrap_or(false),
        tags: split_list(row.get(19)?),
        items: Vec::new(),
        checklist: Vec::new(),
    })
}

#[cfg(test)]
#[path = "tasks_tests.rs"]
mod tests;

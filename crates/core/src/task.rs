// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Task entities read from `TMTask` and `TMChecklistItem`.
//!
//! Things stores to-dos, projects and headings in one table, distinguished
//! by the integer `type` column. Status and start list are small integer
//! codes as well; each enum here maps to and from those codes.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Kind of row in `TMTask`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Todo,
    Project,
    Heading,
}

impl TaskType {
    /// Integer stored in `TMTask.type`.
    pub fn code(&self) -> i64 {
        match self {
            TaskType::Todo => 0,
            TaskType::Project => 1,
            TaskType::Heading => 2,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(TaskType::Todo),
            1 => Some(TaskType::Project),
            2 => Some(TaskType::Heading),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Todo => "todo",
            TaskType::Project => "project",
            TaskType::Heading => "heading",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "todo" | "to-do" => Ok(TaskType::Todo),
            "project" => Ok(TaskType::Project),
            "heading" => Ok(TaskType::Heading),
            _ => Err(Error::InvalidTaskType(s.to_string())),
        }
    }
}

/// Completion state of a task or checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Incomplete,
    Canceled,
    Completed,
}

impl Status {
    /// Integer stored in the `status` column. Code 1 is unused by Things.
    pub fn code(&self) -> i64 {
        match self {
            Status::Incomplete => 0,
            Status::Canceled => 2,
            Status::Completed => 3,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Status::Incomplete),
            2 => Some(Status::Canceled),
            3 => Some(Status::Completed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Incomplete => "incomplete",
            Status::Canceled => "canceled",
            Status::Completed => "completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "incomplete" | "open" => Ok(Status::Incomplete),
            "canceled" | "cancelled" => Ok(Status::Canceled),
            "completed" | "done" => Ok(Status::Completed),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// The list a task lives in when it has no scheduled date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Start {
    Inbox,
    Anytime,
    Someday,
}

impl Start {
    /// Integer stored in `TMTask.start`.
    pub fn code(&self) -> i64 {
        match self {
            Start::Inbox => 0,
            Start::Anytime => 1,
            Start::Someday => 2,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Start::Inbox),
            1 => Some(Start::Anytime),
            2 => Some(Start::Someday),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Start::Inbox => "inbox",
            Start::Anytime => "anytime",
            Start::Someday => "someday",
        }
    }
}

impl fmt::Display for Start {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Start {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "inbox" => Ok(Start::Inbox),
            "anytime" => Ok(Start::Anytime),
            "someday" => Ok(Start::Someday),
            _ => Err(Error::InvalidStart(s.to_string())),
        }
    }
}

/// A to-do, project or heading.
///
/// Dates are decoded on read: packed Things dates become [`NaiveDate`],
/// Unix timestamps become UTC datetimes, and absent values are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub uuid: String,
    #[serde(rename = "type")]
    pub kind: TaskType,
    pub title: String,
    pub status: Status,
    pub start: Start,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_title: Option<String>,
    pub trashed: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Headings and to-dos of a project, or to-dos of a heading.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Task>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub checklist: Vec<ChecklistItem>,
}

/// One line of a to-do's checklist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChecklistItem {
    pub uuid: String,
    pub title: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;

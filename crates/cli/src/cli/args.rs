// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Argument structs for the query commands.

use clap::{Args, ValueEnum};
use things_core::{Start, Status, TaskType};

/// Task kind filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Todo,
    Project,
    Heading,
}

impl From<KindArg> for TaskType {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Todo => TaskType::Todo,
            KindArg::Project => TaskType::Project,
            KindArg::Heading => TaskType::Heading,
        }
    }
}

/// Status filter; `any` disables it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    #[default]
    Incomplete,
    Completed,
    #[value(alias = "cancelled")]
    Canceled,
    Any,
}

impl StatusArg {
    pub fn status(self) -> Option<Status> {
        match self {
            StatusArg::Incomplete => Some(Status::Incomplete),
            StatusArg::Completed => Some(Status::Completed),
            StatusArg::Canceled => Some(Status::Canceled),
            StatusArg::Any => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StartArg {
    Inbox,
    Anytime,
    Someday,
}

impl From<StartArg> for Start {
    fn from(start: StartArg) -> Self {
        match start {
            StartArg::Inbox => Start::Inbox,
            StartArg::Anytime => Start::Anytime,
            StartArg::Someday => Start::Someday,
        }
    }
}

/// Options of `things tasks`.
#[derive(Args, Clone, Debug, Default)]
pub struct TasksArgs {
    /// Only the task with this uuid
    #[arg(long)]
    pub uuid: Option<String>,

    /// Filter by kind
    #[arg(long = "type", short = 't', value_enum)]
    pub kind: Option<KindArg>,

    /// Filter by status
    #[arg(long, short, value_enum, default_value = "incomplete")]
    pub status: StatusArg,

    /// Filter by start list
    #[arg(long, value_enum)]
    pub start: Option<StartArg>,

    /// Area uuid
    #[arg(long)]
    pub area: Option<String>,

    /// Project uuid
    #[arg(long)]
    pub project: Option<String>,

    /// Heading uuid
    #[arg(long)]
    pub heading: Option<String>,

    /// Tag title
    #[arg(long)]
    pub tag: Option<String>,

    /// Start date: future, past, or [OP]YYYY-MM-DD with OP one of = < <= > >=
    #[arg(long, value_name = "EXPR", allow_hyphen_values = true)]
    pub start_date: Option<String>,

    /// Completion date, same syntax as --start-date
    #[arg(long, value_name = "EXPR", allow_hyphen_values = true)]
    pub stop_date: Option<String>,

    /// Deadline, same syntax as --start-date
    #[arg(long, value_name = "EXPR", allow_hyphen_values = true)]
    pub deadline: Option<String>,

    /// Search title, notes and area title
    #[arg(long, short = 'q')]
    pub search: Option<String>,

    /// Only tasks created within N days, weeks or years (e.g. 3d, 2w, 1y)
    #[arg(long, value_name = "N{d,w,y}")]
    pub last: Option<String>,

    /// Show trashed tasks instead of untrashed ones
    #[arg(long)]
    pub trashed: bool,

    /// Nest project and heading contents and checklists
    #[arg(long)]
    pub items: bool,
}

/// Options of `things areas`.
#[derive(Args, Clone, Debug, Default)]
pub struct AreasArgs {
    #[arg(long)]
    pub uuid: Option<String>,

    /// Tag title
    #[arg(long)]
    pub tag: Option<String>,

    /// Include each area's tasks
    #[arg(long)]
    pub items: bool,
}

/// Options of `things tags`.
#[derive(Args, Clone, Debug, Default)]
pub struct TagsArgs {
    #[arg(long)]
    pub uuid: Option<String>,

    /// Parent tag uuid
    #[arg(long, conflicts_with = "top_level")]
    pub parent: Option<String>,

    /// Only tags without a parent
    #[arg(long)]
    pub top_level: bool,

    /// Include the areas and tasks carrying each tag
    #[arg(long)]
    pub items: bool,
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use things_core::{Start, TaskType, TasksQuery};

use crate::cli::TasksArgs;
use crate::display;
use crate::error::Result;

use super::{date_arg, Context};

pub fn run(ctx: &Context, args: &TasksArgs) -> Result<()> {
    let query = build(ctx.db.tasks(), args)?;
    let tasks = crate::time_phase!("query::tasks", { query.all(&ctx.token)? });
    ctx.emit(&tasks, |style| display::task_lines(&tasks, style))
}

/// Apply command-line options to a task query.
pub fn build<'db>(query: TasksQuery<'db>, args: &TasksArgs) -> Result<TasksQuery<'db>> {
    let mut query = query
        .status(args.status.status())
        .kind(args.kind.map(TaskType::from))
        .start(args.start.map(Start::from))
        .start_date(date_arg(args.start_date.as_deref())?)
        .stop_date(date_arg(args.stop_date.as_deref())?)
        .deadline(date_arg(args.deadline.as_deref())?)
        .include_items(args.items);

    if args.trashed {
        query = query.trashed(true);
    }
    if let Some(uuid) = &args.uuid {
        query = query.uuid(uuid.as_str());
    }
    if let Some(area) = &args.area {
        query = query.area(area.as_str());
    }
    if let Some(project) = &args.project {
        query = query.project(project.as_str());
    }
    if let Some(heading) = &args.heading {
        query = query.heading(heading.as_str());
    }
    if let Some(tag) = &args.tag {
        query = query.tag(tag.as_str());
    }
    if let Some(search) = &args.search {
        query = query.search(search.as_str());
    }
    if let Some(last) = &args.last {
        query = query.last(last.as_str());
    }
    Ok(query)
}

#[cfg(test)]
#[path = "tasks_tests.rs"]
mod tests;

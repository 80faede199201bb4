// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering of query results.
//!
//! Each entity renders to one line; nested items are indented two spaces
//! per level beneath their parent.

use chrono::{DateTime, Local, Utc};
use things_core::{Area, ChecklistItem, Status, Tag, Task, TaskType};

use crate::colors;

const INDENT: &str = "  ";

/// Formatting switches shared by the renderers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Style {
    pub color: bool,
}

impl Style {
    fn id(&self, uuid: &str) -> String {
        let id = format!("({uuid})");
        if self.color {
            colors::context(&id)
        } else {
            id
        }
    }
}

fn checkbox(status: Status) -> &'static str {
    match status {
        Status::Incomplete => "[ ]",
        Status::Completed => "[x]",
        Status::Canceled => "[-]",
    }
}

fn tag_list(tags: &[String]) -> Option<String> {
    if tags.is_empty() {
        return None;
    }
    Some(
        tags.iter()
            .map(|t| format!("#{t}"))
            .collect::<Vec<_>>()
            .join(" "),
    )
}

/// One-line summary of a task.
pub fn task_line(task: &Task, style: Style) -> String {
    let head = match task.kind {
        TaskType::Heading => format!("## {}", task.title),
        TaskType::Project => format!("{} {} (project)", checkbox(task.status), task.title),
        TaskType::Todo => format!("{} {}", checkbox(task.status), task.title),
    };
    let mut parts = vec![head];
    if let Some(date) = task.start_date {
        parts.push(format!("start {date}"));
    }
    if let Some(date) = task.deadline {
        parts.push(format!("due {date}"));
    }
    parts.extend(tag_list(&task.tags));
    parts.push(style.id(&task.uuid));
    parts.join("  ")
}

fn checklist_line(item: &ChecklistItem) -> String {
    format!("- {} {}", checkbox(item.status), item.title)
}

/// Tasks with their nested items and checklists.
pub fn task_lines(tasks: &[Task], style: Style) -> Vec<String> {
    let mut lines = Vec::new();
    push_tasks(&mut lines, tasks, 0, style);
    lines
}

fn push_tasks(lines: &mut Vec<String>, tasks: &[Task], depth: usize, style: Style) {
    let indent = INDENT.repeat(depth);
    for task in tasks {
        lines.push(format!("{indent}{}", task_line(task, style)));
        for item in &task.checklist {
            lines.push(format!("{indent}{INDENT}{}", checklist_line(item)));
        }
        push_tasks(lines, &task.items, depth + 1, style);
    }
}

pub fn area_lines(areas: &[Area], style: Style) -> Vec<String> {
    let mut lines = Vec::new();
    for area in areas {
        let mut parts = vec![area.title.clone()];
        if !area.visible {
            parts.push("(hidden)".to_string());
        }
        parts.extend(tag_list(&area.tags));
        parts.push(style.id(&area.uuid));
        lines.push(parts.join("  "));
        push_tasks(&mut lines, &area.items, 1, style);
    }
    lines
}

pub fn tag_lines(tags: &[Tag], style: Style) -> Vec<String> {
    let mut lines = Vec::new();
    for tag in tags {
        let mut parts = vec![tag.title.clone()];
        if let Some(shortcut) = &tag.shortcut {
            parts.push(format!("[{shortcut}]"));
        }
        if let Some(parent) = &tag.parent {
            parts.push(format!("in {parent}"));
        }
        parts.push(style.id(&tag.uuid));
        lines.push(parts.join("  "));
        for area in &tag.areas {
            lines.push(format!("{INDENT}{}  {}", area.title, style.id(&area.uuid)));
        }
        push_tasks(&mut lines, &tag.tasks, 1, style);
    }
    lines
}

fn local_time(time: DateTime<Utc>) -> String {
    time.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Full detail view of one task.
pub fn task_detail(task: &Task, style: Style) -> Vec<String> {
    let mut lines = vec![task_line(task, style)];
    let mut field = |name: &str, value: String| {
        lines.push(format!("{INDENT}{:<10} {value}", format!("{name}:")));
    };

    field("uuid", task.uuid.clone());
    field("type", task.kind.to_string());
    field("status", task.status.to_string());
    field("start", task.start.to_string());
    if let Some(title) = &task.area_title {
        field("area", title.clone());
    }
    if let Some(title) = &task.project_title {
        field("project", title.clone());
    }
    if let Some(title) = &task.heading_title {
        field("heading", title.clone());
    }
    if let Some(date) = task.start_date {
        field("when", date.to_string());
    }
    if let Some(date) = task.deadline {
        field("deadline", date.to_string());
    }
    if let Some(time) = task.reminder_time {
        field("reminder", time.format("%H:%M").to_string());
    }
    if !task.tags.is_empty() {
        field("tags", task.tags.join(", "));
    }
    if let Some(time) = task.created {
        field("created", local_time(time));
    }
    if let Some(time) = task.stop_date {
        field("stopped", local_time(time));
    }
    if task.trashed {
        field("trashed", "yes".to_string());
    }

    if !task.notes.is_empty() {
        lines.push(String::new());
        lines.extend(task.notes.lines().map(|l| format!("{INDENT}{l}")));
    }
    if !task.checklist.is_empty() || !task.items.is_empty() {
        lines.push(String::new());
        for item in &task.checklist {
            lines.push(format!("{INDENT}{}", checklist_line(item)));
        }
        push_tasks(&mut lines, &task.items, 1, style);
    }
    lines
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;

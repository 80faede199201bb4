// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tags read from `TMTag`.

use serde::Serialize;

use crate::area::Area;
use crate::task::Task;

/// A tag. Tags nest through `parent`, which holds the parent tag's uuid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tag {
    pub uuid: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub areas: Vec<Area>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<Task>,
}

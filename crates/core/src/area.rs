// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Areas of responsibility read from `TMArea`.

use serde::Serialize;

use crate::task::Task;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Area {
    pub uuid: String,
    pub title: String,
    pub visible: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Tasks filed directly in the area, filled by eager loading.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Task>,
}

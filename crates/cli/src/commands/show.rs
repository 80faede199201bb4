// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::display;
use crate::error::Result;

use super::Context;

/// Show one task regardless of its status.
pub fn run(ctx: &Context, uuid: &str, items: bool) -> Result<()> {
    let task = crate::time_phase!("query::show", {
        ctx.db
            .tasks()
            .uuid(uuid)
            .status(None)
            .include_items(items)
            .first(&ctx.token)?
    });
    ctx.emit(&task, |style| display::task_detail(&task, style))
}

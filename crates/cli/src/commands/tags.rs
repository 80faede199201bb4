// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::cli::TagsArgs;
use crate::display;
use crate::error::Result;

use super::Context;

pub fn run(ctx: &Context, args: &TagsArgs) -> Result<()> {
    let mut query = ctx.db.tags().include_items(args.items);
    if let Some(uuid) = &args.uuid {
        query = query.uuid(uuid.as_str());
    }
    if let Some(parent) = &args.parent {
        query = query.parent(parent.as_str());
    } else if args.top_level {
        query = query.parent(false);
    }
    let tags = crate::time_phase!("query::tags", { query.all(&ctx.token)? });
    ctx.emit(&tags, |style| display::tag_lines(&tags, style))
}

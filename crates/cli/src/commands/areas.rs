// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::cli::AreasArgs;
use crate::display;
use crate::error::Result;

use super::Context;

pub fn run(ctx: &Context, args: &AreasArgs) -> Result<()> {
    let mut query = ctx.db.areas().include_items(args.items);
    if let Some(uuid) = &args.uuid {
        query = query.uuid(uuid.as_str());
    }
    if let Some(tag) = &args.tag {
        query = query.tag(tag.as_str());
    }
    let areas = crate::time_phase!("query::areas", { query.all(&ctx.token)? });
    ctx.emit(&areas, |style| display::area_lines(&areas, style))
}

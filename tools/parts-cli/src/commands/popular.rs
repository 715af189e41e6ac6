//! Popular searches command.

use anyhow::Result;

use super::PopularArgs;
use crate::context::Context;

/// Run the popular command.
pub fn run(_args: PopularArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let popular = catalog.popular_searches()?;

    if ctx.output.is_json() {
        ctx.output.json(&popular);
        return Ok(());
    }

    ctx.output.header("Popular searches");
    for name in &popular {
        ctx.output.list_item(name);
    }

    Ok(())
}

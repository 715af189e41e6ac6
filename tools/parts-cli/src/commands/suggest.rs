//! Type-ahead suggestion command.

use anyhow::Result;

use super::SuggestArgs;
use crate::context::Context;

/// Run the suggest command.
pub fn run(args: SuggestArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let suggestions = catalog.suggestions(&args.query)?;

    if ctx.output.is_json() {
        ctx.output.json(&suggestions);
        return Ok(());
    }

    if suggestions.is_empty() {
        ctx.output.info("No suggestions.");
        return Ok(());
    }

    for suggestion in &suggestions {
        ctx.output.list_item(&format!(
            "{} {}",
            suggestion.text,
            console::style(format!("({})", suggestion.kind.as_str())).dim()
        ));
    }

    Ok(())
}

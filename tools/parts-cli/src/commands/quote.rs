//! Order quote command.

use anyhow::{Context as _, Result};
use parts_catalog::checkout::OrderRequest;

use super::QuoteArgs;
use crate::context::Context;
use crate::output::status_badge;

/// Run the quote command.
pub fn run(args: QuoteArgs, ctx: &Context) -> Result<()> {
    let path = ctx.cwd.join(&args.order);
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read order: {}", path.display()))?;
    let request: OrderRequest = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse order: {}", path.display()))?;

    let catalog = ctx.open_catalog()?;
    let quote = catalog.quote_order(&request)?;

    if ctx.output.is_json() {
        ctx.output.json(&quote);
        return Ok(());
    }

    ctx.output.header(&format!("Quote for {}", quote.customer_name));
    let widths = [6, 32, 6, 12, 12];
    ctx.output
        .table_row(&["ID", "PRODUCT", "QTY", "UNIT", "TOTAL"], &widths);
    for line in &quote.lines {
        let id = line.product_id.to_string();
        let quantity = line.quantity.to_string();
        let unit = line.unit_price.display();
        let total = line.line_total.display();
        ctx.output.table_row(
            &[&id, &line.product_name, &quantity, &unit, &total],
            &widths,
        );
    }

    ctx.output.kv("items", &quote.item_count().to_string());
    ctx.output.kv("total", &quote.total.display());
    ctx.output.kv(
        "deposit",
        &format!("{} via {}", quote.deposit.display(), quote.payment_method),
    );
    ctx.output.kv("on delivery", &quote.balance_due().display());
    ctx.output.kv("status", &status_badge(quote.status));

    Ok(())
}

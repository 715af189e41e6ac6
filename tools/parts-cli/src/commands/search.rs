//! Product search command.

use anyhow::Result;
use parts_catalog::search::{ProductFilter, SearchQuery, SortOption};

use super::SearchArgs;
use crate::context::Context;
use crate::output::{format_price, stock_badge};

/// Run the search command.
pub fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let query = build_query(&args, ctx);
    let catalog = ctx.open_catalog()?;
    let mut results = catalog.search(&query)?;

    if let Some(limit) = args.limit {
        results.hits.truncate(limit);
    }

    if ctx.output.is_json() {
        ctx.output.json(&results.hits);
        return Ok(());
    }

    match query.text() {
        Some(text) => ctx.output.header(&format!("Results for \"{}\"", text)),
        None => ctx.output.header("Products"),
    }

    if results.is_empty() {
        ctx.output.info("No products found.");
        return Ok(());
    }

    let widths = [6, 32, 10, 14, 14, 16];
    ctx.output
        .table_row(&["ID", "NAME", "PRICE", "BRAND", "CATEGORY", "STOCK"], &widths);
    for hit in &results.hits {
        let product = &hit.product;
        let id = product.product.id.to_string();
        let price = format_price(product.product.price);
        let stock = stock_badge(product.product.stock_quantity);
        ctx.output.table_row(
            &[
                &id,
                &product.product.name,
                &price,
                product.brand_name.as_deref().unwrap_or("-"),
                product.category_name.as_deref().unwrap_or("-"),
                &stock,
            ],
            &widths,
        );
    }

    if ctx.output.is_verbose() && results.searched {
        ctx.output.info(&format!("Terms: {}", results.terms.join(", ")));
    }
    ctx.output.info(&format!("{} product(s)", results.len()));

    Ok(())
}

fn build_query(args: &SearchArgs, ctx: &Context) -> SearchQuery {
    let mut filter = ProductFilter::new();
    if let Some(id) = args.category {
        filter = filter.category(id);
    }
    if let Some(id) = args.brand {
        filter = filter.brand(id);
    }
    if let Some(id) = args.model {
        filter = filter.model(id);
    }

    let mut query = SearchQuery::new().with_filter(filter);
    if let Some(text) = &args.query {
        query = query.with_text(text.as_str());
    }

    // Unknown sort keys are ignored rather than rejected.
    if let Some(key) = &args.sort {
        match SortOption::parse_lenient(key) {
            Some(sort) => query = query.with_sort(sort),
            None => ctx.output.warn(&format!("Ignoring unknown sort: {}", key)),
        }
    }

    query
}

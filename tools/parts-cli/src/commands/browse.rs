//! Catalog browsing commands.

use anyhow::Result;
use parts_catalog::{BrandId, ProductId};

use super::{BrowseArgs, BrowseCommand};
use crate::context::Context;
use crate::output::{format_price, stock_badge};

/// Run the browse command.
pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    match args.command {
        BrowseCommand::Brands => list_brands(ctx),
        BrowseCommand::Models { brand } => list_models(brand, ctx),
        BrowseCommand::Categories => list_categories(ctx),
        BrowseCommand::Product { id } => show_product(id, ctx),
    }
}

fn list_brands(ctx: &Context) -> Result<()> {
    let brands = ctx.open_catalog()?.brands()?;

    if ctx.output.is_json() {
        ctx.output.json(&brands);
        return Ok(());
    }

    ctx.output.header("Brands");
    for brand in &brands {
        ctx.output.list_item(&format!("{} {}", brand.id, brand.name));
    }

    Ok(())
}

fn list_models(brand: Option<i64>, ctx: &Context) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let models = match brand {
        Some(id) => catalog.models_for_brand(BrandId::new(id))?,
        None => catalog.models()?,
    };

    if ctx.output.is_json() {
        ctx.output.json(&models);
        return Ok(());
    }

    ctx.output.header("Car models");
    for model in &models {
        ctx.output.list_item(&format!(
            "{} {} (brand {})",
            model.id, model.name, model.brand_id
        ));
    }

    Ok(())
}

fn list_categories(ctx: &Context) -> Result<()> {
    let categories = ctx.open_catalog()?.categories()?;

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header("Categories");
    for category in &categories {
        ctx.output
            .list_item(&format!("{} {}", category.id, category.name));
    }

    Ok(())
}

fn show_product(id: i64, ctx: &Context) -> Result<()> {
    let product = ctx.open_catalog()?.product(ProductId::new(id))?;

    if ctx.output.is_json() {
        ctx.output.json(&product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("id", &product.id.to_string());
    ctx.output.kv("price", &format_price(product.price));
    ctx.output.kv("stock", &stock_badge(product.stock_quantity));
    ctx.output.kv(
        "rating",
        &format!("{:.1} ({} reviews)", product.rating, product.reviews_count),
    );
    if let Some(description) = &product.description {
        ctx.output.kv("description", description);
    }

    Ok(())
}

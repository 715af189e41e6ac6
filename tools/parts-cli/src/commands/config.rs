//! Configuration management commands.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Result};
use parts_catalog::Currency;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx),
        ConfigCommand::Init { catalog, force } => init_config(&catalog, force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_file {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("[catalog]");
    ctx.output.kv("path", &ctx.config.catalog.path.display().to_string());
    ctx.output.kv("currency", &ctx.config.catalog.currency);

    let search = &ctx.config.search;
    ctx.output.info("[search]");
    ctx.output.kv("suggestion_min_len", &search.suggestion_min_len.to_string());
    ctx.output.kv("suggestion_limit", &search.suggestion_limit.to_string());
    ctx.output.kv(
        "suggestion_product_sample",
        &search.suggestion_product_sample.to_string(),
    );
    ctx.output.kv("popular_per_source", &search.popular_per_source.to_string());
    ctx.output.kv("popular_limit", &search.popular_limit.to_string());

    ctx.output.info("[search.weights]");
    for (name, value) in weight_entries(&ctx.config) {
        ctx.output.kv(name, &value.to_string());
    }

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let config_path = find_config_file(ctx)?;

    let mut config = CliConfig::load(&config_path)?;
    set_config_value(&mut config, key, value)?;
    config.save(&config_path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

fn init_config(catalog: &str, force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config(catalog))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    let errors = config_errors(&ctx.config);
    let mut warnings: Vec<String> = Vec::new();

    let catalog_path = ctx.catalog_path();
    if !catalog_path.exists() {
        warnings.push(format!("catalog file not found: {}", catalog_path.display()));
    }
    if weight_entries(&ctx.config).iter().all(|(_, w)| *w == 0) {
        warnings.push("all search weights are 0; text searches will match nothing".to_string());
    }

    ctx.output.header("Validating configuration");

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

fn config_errors(config: &CliConfig) -> Vec<String> {
    let mut errors = Vec::new();

    if Currency::from_code(&config.catalog.currency).is_none() {
        errors.push(format!(
            "catalog.currency '{}' is not one of EGP, USD, EUR",
            config.catalog.currency
        ));
    }
    if config.search.suggestion_limit == 0 {
        errors.push("search.suggestion_limit must be at least 1".to_string());
    }
    if config.search.popular_limit == 0 {
        errors.push("search.popular_limit must be at least 1".to_string());
    }

    errors
}

fn weight_entries(config: &CliConfig) -> [(&'static str, u32); 8] {
    let w = &config.search.weights;
    [
        ("name_contains", w.name_contains),
        ("name_prefix", w.name_prefix),
        ("description_contains", w.description_contains),
        ("brand_contains", w.brand_contains),
        ("brand_exact", w.brand_exact),
        ("model_contains", w.model_contains),
        ("model_exact", w.model_exact),
        ("category_contains", w.category_contains),
    ]
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();
    let search = &config.search;

    match parts.as_slice() {
        ["catalog", "path"] => Ok(config.catalog.path.display().to_string()),
        ["catalog", "currency"] => Ok(config.catalog.currency.clone()),
        ["search", "suggestion_min_len"] => Ok(search.suggestion_min_len.to_string()),
        ["search", "suggestion_limit"] => Ok(search.suggestion_limit.to_string()),
        ["search", "suggestion_product_sample"] => {
            Ok(search.suggestion_product_sample.to_string())
        }
        ["search", "popular_per_source"] => Ok(search.popular_per_source.to_string()),
        ["search", "popular_limit"] => Ok(search.popular_limit.to_string()),
        ["search", "weights", name] => weight_entries(config)
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, w)| w.to_string())
            .ok_or_else(|| anyhow::anyhow!("Unknown config key: {}", key)),
        _ => bail!("Unknown config key: {}", key),
    }
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();
    let search = &mut config.search;

    match parts.as_slice() {
        ["catalog", "path"] => config.catalog.path = PathBuf::from(value),
        ["catalog", "currency"] => {
            let Some(currency) = Currency::from_code(value) else {
                bail!("Unknown currency: {}", value);
            };
            config.catalog.currency = currency.code().to_string();
        }
        ["search", "suggestion_min_len"] => search.suggestion_min_len = value.parse()?,
        ["search", "suggestion_limit"] => search.suggestion_limit = value.parse()?,
        ["search", "suggestion_product_sample"] => {
            search.suggestion_product_sample = value.parse()?
        }
        ["search", "popular_per_source"] => search.popular_per_source = value.parse()?,
        ["search", "popular_limit"] => search.popular_limit = value.parse()?,
        ["search", "weights", "name_contains"] => search.weights.name_contains = value.parse()?,
        ["search", "weights", "name_prefix"] => search.weights.name_prefix = value.parse()?,
        ["search", "weights", "description_contains"] => {
            search.weights.description_contains = value.parse()?
        }
        ["search", "weights", "brand_contains"] => search.weights.brand_contains = value.parse()?,
        ["search", "weights", "brand_exact"] => search.weights.brand_exact = value.parse()?,
        ["search", "weights", "model_contains"] => search.weights.model_contains = value.parse()?,
        ["search", "weights", "model_exact"] => search.weights.model_exact = value.parse()?,
        ["search", "weights", "category_contains"] => {
            search.weights.category_contains = value.parse()?
        }
        _ => bail!("Unknown or read-only config key: {}", key),
    }

    Ok(())
}

fn find_config_file(ctx: &Context) -> Result<PathBuf> {
    if let Some(path) = &ctx.config_file {
        return Ok(path.clone());
    }
    for name in CONFIG_NAMES {
        let path = ctx.cwd.join(name);
        if path.exists() {
            return Ok(path);
        }
    }
    bail!("No config file found. Run `parts config init` to create one.")
}

//! CLI command implementations.

pub mod browse;
pub mod config;
pub mod popular;
pub mod quote;
pub mod search;
pub mod suggest;

use clap::{Args, Subcommand};

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Free-text query. Omit to list every product passing the filters.
    pub query: Option<String>,

    /// Only products in this category.
    #[arg(long)]
    pub category: Option<i64>,

    /// Only products of this brand.
    #[arg(long)]
    pub brand: Option<i64>,

    /// Only products for this car model.
    #[arg(long)]
    pub model: Option<i64>,

    /// Sort order: relevance, price_asc, price_desc or name.
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Show only the first N hits.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the suggest command.
#[derive(Args)]
pub struct SuggestArgs {
    /// Partial query typed so far.
    pub query: String,
}

/// Arguments for the popular command.
#[derive(Args)]
pub struct PopularArgs {}

/// Arguments for the quote command.
#[derive(Args)]
pub struct QuoteArgs {
    /// JSON order request file.
    pub order: String,
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    #[command(subcommand)]
    pub command: BrowseCommand,
}

#[derive(Subcommand)]
pub enum BrowseCommand {
    /// List brands.
    Brands,
    /// List car models.
    Models {
        /// Only models of this brand.
        #[arg(long)]
        brand: Option<i64>,
    },
    /// List categories.
    Categories,
    /// Show one product.
    Product {
        /// Product id.
        id: i64,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Catalog file the config points at.
        #[arg(long, default_value = "catalog.json")]
        catalog: String,

        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

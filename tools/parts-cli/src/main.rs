//! Parts CLI - Command line front end for the auto parts catalog.
//!
//! Commands:
//! - `parts search` - Search and filter products
//! - `parts suggest` - Type-ahead suggestions for a partial query
//! - `parts popular` - Popular brand and category searches
//! - `parts quote` - Price an order request
//! - `parts browse` - List brands, models, categories or one product
//! - `parts config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BrowseArgs, ConfigArgs, PopularArgs, QuoteArgs, SearchArgs, SuggestArgs};

/// Parts CLI - Search the auto parts catalog and quote orders
#[derive(Parser)]
#[command(name = "parts")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Catalog JSON file, overriding the config
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search products by text, filters and sort order
    Search(SearchArgs),

    /// Suggest brands, models, categories and products
    Suggest(SuggestArgs),

    /// Show popular searches
    Popular(PopularArgs),

    /// Price an order request
    Quote(QuoteArgs),

    /// Browse catalog reference data
    Browse(BrowseArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let loaded = context::Context::load(
        cli.config.as_deref(),
        cli.catalog.as_deref(),
        output.clone(),
    );
    let ctx = match loaded {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Search(args) => commands::search::run(args, &ctx),
        Commands::Suggest(args) => commands::suggest::run(args, &ctx),
        Commands::Popular(args) => commands::popular::run(args, &ctx),
        Commands::Quote(args) => commands::quote::run(args, &ctx),
        Commands::Browse(args) => commands::browse::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr. `RUST_LOG` wins; otherwise warnings, or debug with `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

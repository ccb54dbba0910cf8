//! pricewise - Compare product prices across stores
//!
//! Reads an exported catalog snapshot and answers "where is it cheapest?"
//! for single products and whole shopping lists.

use anyhow::Result;
use clap::{Parser, Subcommand};
use pricewise::catalog::{Coordinates, StoreType};
use pricewise::commands::{CompareCommand, ListCommand, StoresCommand};
use pricewise::config::{Config, OutputFormat};
use pricewise::currency::{currencies, format_price};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pricewise",
    version,
    about = "Compare product prices across stores",
    long_about = "Finds the cheapest store for products and shopping lists in a catalog snapshot, \
                  optionally counting delivery fees and limiting stores to those nearby."
)]
struct Cli {
    /// Path to the catalog snapshot (JSON)
    #[arg(long, global = true, env = "PRICEWISE_CATALOG")]
    catalog: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format (table, json, markdown, csv)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare prices for a product across stores
    #[command(alias = "c")]
    Compare {
        /// Product id
        product: String,

        /// Only compare this variant
        #[arg(long)]
        variant: Option<String>,

        /// Rank by goods price only, ignoring delivery fees
        #[arg(long)]
        no_delivery: bool,
    },

    /// Split a shopping list across the cheapest stores
    #[command(alias = "l")]
    List {
        /// Shopping list id or name
        list: String,
    },

    /// List stores, optionally only those nearby
    Stores {
        /// Your location as LAT,LON
        #[arg(long, allow_hyphen_values = true)]
        near: Option<Coordinates>,

        /// Search radius in kilometres
        #[arg(long)]
        max_distance: Option<f64>,

        /// Only stores that deliver
        #[arg(long)]
        delivery_only: bool,

        /// Only stores of this type (physical, online)
        #[arg(long = "type")]
        store_type: Option<StoreType>,
    },

    /// List supported currencies
    Currencies,

    /// Format an amount in a currency
    Price {
        /// Amount to format
        #[arg(allow_negative_numbers = true)]
        amount: f64,

        /// ISO 4217 currency code
        code: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(catalog) = cli.catalog {
        config.catalog = catalog;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    match cli.command {
        Commands::Compare { product, variant, no_delivery } => {
            if no_delivery {
                config.include_delivery = false;
            }

            let cmd = CompareCommand::new(config);
            let output = cmd.execute(&product, variant.as_deref()).await?;
            println!("{}", output);
        }

        Commands::List { list } => {
            let cmd = ListCommand::new(config);
            let output = cmd.execute(&list).await?;
            println!("{}", output);
        }

        Commands::Stores { near, max_distance, delivery_only, store_type } => {
            if near.is_some() {
                config.location = near;
            }
            if let Some(distance) = max_distance {
                config.max_distance_km = distance;
            }
            config.delivery_only |= delivery_only;
            if store_type.is_some() {
                config.store_type = store_type;
            }

            let cmd = StoresCommand::new(config);
            let output = cmd.execute().await?;
            println!("{}", output);
        }

        Commands::Currencies => {
            println!("Supported currencies:\n");
            println!("{:<6} {:<8} {:<28}", "Code", "Symbol", "Name");
            println!("{:-<6} {:-<8} {:-<28}", "", "", "");

            for currency in currencies() {
                println!("{:<6} {:<8} {:<28}", currency.code, currency.symbol, currency.name);
            }
        }

        Commands::Price { amount, code } => {
            println!("{}", format_price(amount, &code.to_uppercase()));
        }
    }

    Ok(())
}

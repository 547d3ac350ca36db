//! FX Deals CLI
//!
//! Command-line interface for the FX Deals Warehouse API.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use fxdeals_client::FxDealsClient;
use fxdeals_types::{BatchRequest, BatchStatus, DealRequest, parse_deal_timestamp};

#[derive(Parser)]
#[command(name = "fxdeals")]
#[command(author, version, about = "FX Deals Warehouse CLI client", long_about = None)]
struct Cli {
    /// Base URL of the FX Deals API
    #[arg(long, env = "FXDEALS_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deal operations
    Deal {
        #[command(subcommand)]
        action: DealCommands,
    },
    /// Check API health
    Health,
}

#[derive(Subcommand)]
enum DealCommands {
    /// Import a single deal
    Import {
        /// Unique deal identifier
        #[arg(long)]
        id: String,
        /// ISO 4217 code of the currency sold
        #[arg(long)]
        from: String,
        /// ISO 4217 code of the currency bought
        #[arg(long)]
        to: String,
        /// Amount in the from-currency (at least 0.01)
        #[arg(long)]
        amount: Decimal,
        /// Deal time as RFC 3339, or a local date-time taken as UTC; defaults to now
        #[arg(long, value_parser = parse_timestamp)]
        timestamp: Option<DateTime<Utc>>,
    },
    /// Import deals from a JSON file
    ///
    /// The file holds either an array of deals or `{"deals": [...]}`.
    Batch {
        file: PathBuf,
    },
    /// List all stored deals
    List,
}

fn parse_timestamp(raw: &str) -> std::result::Result<DateTime<Utc>, String> {
    parse_deal_timestamp(raw).ok_or_else(|| format!("invalid deal timestamp: {raw}"))
}

/// Rows are passed through untouched; the server reports bad rows per row.
#[derive(Deserialize)]
#[serde(untagged)]
enum BatchFile {
    Rows(Vec<Value>),
    Envelope(BatchRequest),
}

fn parse_batch(contents: &str) -> Result<Vec<Value>> {
    let parsed: BatchFile =
        serde_json::from_str(contents).context("expected a JSON array of deals or {\"deals\": [...]}")?;
    Ok(match parsed {
        BatchFile::Rows(rows) => rows,
        BatchFile::Envelope(batch) => batch.deals,
    })
}

fn read_batch(path: &Path) -> Result<Vec<Value>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_batch(&contents)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client = FxDealsClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Deal { action } => match action {
            DealCommands::Import {
                id,
                from,
                to,
                amount,
                timestamp,
            } => {
                let req = DealRequest::new(
                    id,
                    from.to_uppercase(),
                    to.to_uppercase(),
                    timestamp.unwrap_or_else(Utc::now),
                    amount,
                );
                let deal = client.import_deal(&req).await?;
                println!("{}", serde_json::to_string_pretty(&deal)?);
            }
            DealCommands::Batch { file } => {
                let rows = read_batch(&file)?;
                let result = client.import_batch(&rows).await?;
                println!("{}", serde_json::to_string_pretty(&result)?);
                if result.status() == BatchStatus::Rejected {
                    std::process::exit(1);
                }
            }
            DealCommands::List => {
                let deals = client.list_deals().await?;
                println!("{}", serde_json::to_string_pretty(&deals)?);
            }
        },
    }

    Ok(())
}

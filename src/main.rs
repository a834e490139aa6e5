//! Host process for the fallback connectors.
//!
//! Loads configuration (TOML file or environment), installs logging and
//! optional metrics, then runs one command against the candidate lists.

use std::path::PathBuf;

use alloy::primitives::Address;
use clap::{Parser, Subcommand};
use serde_json::json;

use fallback_connector::blockchain::{AlloyBalanceSource, BalanceReader, TokenBalance};
use fallback_connector::config::{self, ConnectorConfig};
use fallback_connector::endpoint::{resolve_database_candidates, resolve_rpc_candidates};
use fallback_connector::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "fallback-connector")]
#[command(about = "Resolve and exercise database and RPC fallback candidates", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults plus environment when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved candidate lists (credentials redacted)
    Candidates,
    /// Read a token balance through the RPC fallback path
    Balance {
        /// Owner address (0x-prefixed hex)
        owner: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => config::from_env()?,
    };

    logging::init_logging(&config.observability);
    tracing::info!(
        chain_id = config.rpc.chain_id,
        network = %config.rpc.network_name,
        "fallback-connector v0.1.0 starting"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to install metrics exporter");
                }
            }
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    match cli.command {
        Commands::Candidates => print_candidates(&config)?,
        Commands::Balance { owner } => {
            let balance = match owner.parse::<Address>() {
                Ok(owner) => {
                    let source = AlloyBalanceSource::from_config(&config.rpc);
                    BalanceReader::from_config(source, &config.rpc)
                        .balance_of(owner)
                        .await
                }
                Err(e) => {
                    tracing::error!(owner = %owner, error = %e, "Error fetching balance, invalid owner address");
                    TokenBalance::Unavailable
                }
            };
            println!("{}", balance);
        }
    }

    Ok(())
}

fn print_candidates(config: &ConnectorConfig) -> Result<(), serde_json::Error> {
    let database = resolve_database_candidates(
        &config.database.embedded_uri,
        config.database.uri_override.as_deref(),
    );
    let rpc = resolve_rpc_candidates(config.rpc.primary_url.as_deref(), &config.rpc.fallback_urls);

    let report = json!({
        "database": database.iter().map(ToString::to_string).collect::<Vec<_>>(),
        "rpc": rpc.iter().map(ToString::to_string).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

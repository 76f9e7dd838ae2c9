//! Transaction-Relay Client (v1)
//!
//! An interactive command-line client for a remote transaction relay,
//! built with Tokio and reqwest.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌────────────────────────────────────────────────┐
//!                  │               RELAY CLIENT                     │
//!                  │                                                │
//!   User Input     │  ┌─────────┐    ┌──────────┐    ┌───────────┐ │
//!   ───────────────┼─▶│  shell  │───▶│  relay   │───▶│   HTTP    │─┼──▶ Relay
//!                  │  │  loop   │    │  client  │    │ transport │ │    Service
//!   Results        │  │         │◀───│ +monitor │◀───│ (reqwest) │ │
//!   ◀──────────────┼──└─────────┘    └──────────┘    └───────────┘ │
//!                  │                                                │
//!                  │  ┌──────────────────────────────────────────┐  │
//!                  │  │   Cross-Cutting: config · observability  │  │
//!                  │  └──────────────────────────────────────────┘  │
//!                  └────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::io::BufReader;

use relay_client::config::validation::validate_config;
use relay_client::config::{load_config, ClientConfig};
use relay_client::relay::{MonitorSettings, RelayClient};
use relay_client::{observability, Shell};

#[derive(Parser)]
#[command(name = "relay-client")]
#[command(about = "Interactive client for the transaction relay", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the relay base URL.
    #[arg(short, long)]
    url: Option<String>,

    /// Override the status poll interval, in milliseconds.
    #[arg(short, long)]
    interval: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::logging::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ClientConfig::default(),
    };
    if let Some(url) = cli.url {
        config.relay.base_url = url;
    }
    if let Some(interval) = cli.interval {
        config.monitor.poll_interval_ms = interval;
    }

    // Overrides bypass the loader, so re-check the merged result.
    if let Err(errors) = validate_config(&config) {
        for error in &errors {
            tracing::error!(%error, "Invalid configuration");
        }
        return Err(format!("configuration rejected ({} problems)", errors.len()).into());
    }

    tracing::info!(
        base_url = %config.relay.base_url,
        poll_interval_ms = config.monitor.poll_interval_ms,
        "relay-client v0.1.0 starting"
    );

    let client = RelayClient::new(&config.relay)?;
    let monitor_settings = MonitorSettings::from(&config.monitor);

    let mut shell = Shell::new(BufReader::new(tokio::io::stdin()), client, monitor_settings);
    shell.run().await?;

    tracing::info!("Session ended");
    Ok(())
}

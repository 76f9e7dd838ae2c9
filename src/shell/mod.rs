//! Interactive command shell.
//!
//! # Data Flow
//! ```text
//! stdin (or any AsyncBufRead)
//!     → command loop (broadcast | monitor | exit)
//!     → RelayClient
//!     → stdout (results) / stderr (command errors)
//! ```
//!
//! The shell is the top-level error boundary: a failing command is printed
//! and the loop keeps going. Only the process (or end of input) ends it.

use std::error::Error;
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::relay::{MonitorSettings, RelayClient, RelayError, TradeRecord, TxHash};

const MENU: &str = "Command:\n1. Broadcast Transaction\n2. Monitor Transaction\n3. Exit\nEnter Command: ";

/// Interactive session state.
///
/// Generic over its input so tests can drive it with a scripted byte
/// buffer instead of stdin.
pub struct Shell<R> {
    input: R,
    client: RelayClient,
    monitor_settings: MonitorSettings,
}

impl<R: AsyncBufRead + Unpin> Shell<R> {
    pub fn new(input: R, client: RelayClient, monitor_settings: MonitorSettings) -> Self {
        Self {
            input,
            client,
            monitor_settings,
        }
    }

    /// Run the command loop until the user exits or input ends.
    pub async fn run(&mut self) -> Result<(), Box<dyn Error>> {
        loop {
            let Some(command) = self.prompt(MENU).await? else {
                return Ok(());
            };
            println!();

            match command.as_str() {
                "1" => {
                    if let Err(e) = self.broadcast_command().await {
                        eprintln!("Broadcast error: {}", e);
                    }
                }
                "2" => {
                    if let Err(e) = self.monitor_command().await {
                        eprintln!("Monitoring error: {}", e);
                    }
                }
                "3" => {
                    println!("Exiting...");
                    return Ok(());
                }
                _ => println!("Invalid command. Please try again."),
            }
            println!();
        }
    }

    /// Collect a trade record from the user and broadcast it.
    ///
    /// Inputs are validated here so a typo never reaches the wire: the
    /// symbol must be non-empty and the price must parse as an integer.
    async fn broadcast_command(&mut self) -> Result<(), Box<dyn Error>> {
        let symbol = self.require_line("Enter symbol (e.g., BTC, ETH): ").await?;
        if symbol.is_empty() {
            return Err(RelayError::InvalidInput("symbol must not be empty".to_string()).into());
        }

        let price_raw = self.require_line("Enter price: ").await?;
        let price: i64 = price_raw.parse().map_err(|_| {
            RelayError::InvalidInput(format!("price '{}' is not an integer", price_raw))
        })?;

        let record = TradeRecord {
            symbol,
            price,
            timestamp: epoch_millis(),
        };

        let tx_hash = self.client.broadcast(&record).await?;
        println!("Transaction Broadcasted with Hash: {}", tx_hash);
        Ok(())
    }

    /// Block the shell on one transaction until it settles.
    async fn monitor_command(&mut self) -> Result<(), Box<dyn Error>> {
        let raw = self.require_line("Enter Transaction Hash: ").await?;
        if raw.is_empty() {
            return Err(RelayError::InvalidInput("transaction hash must not be empty".to_string()).into());
        }

        let hash = TxHash::from(raw);
        let status = self.client.monitor(&hash, &self.monitor_settings).await?;
        println!("Transaction Final Status: {}", status);
        Ok(())
    }

    /// Print a prompt and read one trimmed line. `None` means end of input.
    async fn prompt(&mut self, text: &str) -> Result<Option<String>, std::io::Error> {
        print!("{}", text);
        std::io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like [`prompt`](Self::prompt), but end of input mid-command is an error.
    async fn require_line(&mut self, text: &str) -> Result<String, std::io::Error> {
        self.prompt(text).await?.ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "input ended mid-command")
        })
    }
}

fn epoch_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

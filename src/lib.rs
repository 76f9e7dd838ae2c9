//! Transaction-Relay Client Library

pub mod config;
pub mod observability;
pub mod relay;
pub mod shell;

pub use config::ClientConfig;
pub use relay::{MonitorSettings, RelayClient, RelayError, TradeRecord, TxHash, TxStatus};
pub use shell::Shell;

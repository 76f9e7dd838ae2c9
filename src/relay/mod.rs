//! Transaction-relay subsystem.
//!
//! # Data Flow
//! ```text
//! TradeRecord (symbol, price, timestamp)
//!     → client.rs (POST /broadcast)
//!     → TxHash
//!     → monitor.rs (GET /check/{tx_hash} until terminal)
//!     → TxStatus (CONFIRMED | FAILED | DNE)
//! ```
//!
//! # Design Decisions
//! - Statuses are an open string set; only the terminal subset is known
//! - No retry or backoff: every failure propagates to the caller as-is
//! - Monitoring polls sequentially, never overlapping its own requests

pub mod client;
pub mod monitor;
pub mod types;

pub use client::RelayClient;
pub use monitor::{MonitorSettings, StatusMonitor};
pub use types::{RelayError, TradeRecord, TxHash, TxStatus};

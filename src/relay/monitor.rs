//! Transaction confirmation monitoring.
//!
//! # Data Flow
//! ```text
//! TxHash
//!     → wait_for_terminal (sleep interval, then check_status)
//!     → terminal status  → Ok(status)
//!     → any client error → Err (loop ends, no further polls)
//! ```
//!
//! Polling is strictly sequential: each status check completes before the
//! next interval starts, so two requests for the same handle are never in
//! flight at once.

use std::time::Duration;

use tokio::time::{sleep, Instant};

use crate::config::MonitorConfig;
use crate::relay::client::RelayClient;
use crate::relay::types::{RelayError, RelayResult, TxHash, TxStatus};

/// Default delay between consecutive status checks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(5000);

/// Tuning knobs for a monitoring run.
#[derive(Debug, Clone)]
pub struct MonitorSettings {
    /// Delay between consecutive status checks.
    pub poll_interval: Duration,
    /// Stop with [`RelayError::ConfirmationTimeout`] after this many polls.
    /// `None` polls until a terminal status arrives.
    pub max_attempts: Option<u64>,
    /// Stop once this much wall time has elapsed. `None` means no deadline.
    pub deadline: Option<Duration>,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_attempts: None,
            deadline: None,
        }
    }
}

impl From<&MonitorConfig> for MonitorSettings {
    fn from(config: &MonitorConfig) -> Self {
        Self {
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            max_attempts: config.max_attempts,
            deadline: config.deadline_secs.map(Duration::from_secs),
        }
    }
}

/// Polls the relay until a transaction reaches a terminal status.
pub struct StatusMonitor {
    client: RelayClient,
    settings: MonitorSettings,
}

impl StatusMonitor {
    /// Create a monitor over an owned client handle.
    pub fn new(client: RelayClient, settings: MonitorSettings) -> Self {
        Self { client, settings }
    }

    /// Run the polling loop for one transaction.
    ///
    /// Waits one interval before the first check, then keeps checking until
    /// the status turns terminal. Errors from the status check abort the
    /// loop immediately and propagate; a status is never polled again after
    /// a terminal value or an error. With neither `max_attempts` nor
    /// `deadline` set the loop runs until the relay settles the
    /// transaction.
    pub async fn wait_for_terminal(&self, hash: &TxHash) -> RelayResult<TxStatus> {
        let started = Instant::now();
        let mut attempts: u64 = 0;

        tracing::info!(
            tx_hash = %hash,
            poll_interval_ms = self.settings.poll_interval.as_millis() as u64,
            "Monitoring transaction"
        );

        loop {
            sleep(self.settings.poll_interval).await;

            let status = self.client.check_status(hash).await?;
            attempts += 1;
            tracing::info!(tx_hash = %hash, status = %status, attempts, "Observed transaction status");

            if status.is_terminal() {
                return Ok(status);
            }

            if let Some(max) = self.settings.max_attempts {
                if attempts >= max {
                    tracing::warn!(tx_hash = %hash, attempts, "Attempt cap reached before terminal status");
                    return Err(RelayError::ConfirmationTimeout { attempts });
                }
            }

            if let Some(deadline) = self.settings.deadline {
                if started.elapsed() >= deadline {
                    tracing::warn!(tx_hash = %hash, attempts, "Deadline elapsed before terminal status");
                    return Err(RelayError::ConfirmationTimeout { attempts });
                }
            }
        }
    }
}

//! HTTP client for the transaction relay.
//!
//! # Responsibilities
//! - Submit trade records to the relay (`POST /broadcast`)
//! - Query confirmation state by handle (`GET /check/{tx_hash}`)
//! - Map transport, remote and decode failures to typed errors

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::RelayConfig;
use crate::relay::monitor::{MonitorSettings, StatusMonitor};
use crate::relay::types::{
    BroadcastResponse, RelayError, RelayResult, StatusResponse, TradeRecord, TxHash, TxStatus,
};

/// Client for the transaction-relay HTTP API.
///
/// Holds only the base URL and a pooled [`reqwest::Client`]; every call is
/// self-contained, so clones can be used from any number of tasks.
#[derive(Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    base_url: String,
}

impl RelayClient {
    /// Create a new relay client from configuration.
    ///
    /// Fails if the base URL is not a valid absolute URL or the underlying
    /// HTTP client cannot be constructed.
    pub fn new(config: &RelayConfig) -> RelayResult<Self> {
        let parsed: url::Url = config
            .base_url
            .parse()
            .map_err(|e| RelayError::InvalidInput(format!("invalid base URL '{}': {}", config.base_url, e)))?;
        if !parsed.has_host() {
            return Err(RelayError::InvalidInput(format!(
                "base URL '{}' has no host",
                config.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| RelayError::InvalidInput(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Broadcast a trade record to the relay.
    ///
    /// Returns the transaction handle exactly as reported by the server.
    pub async fn broadcast(&self, record: &TradeRecord) -> RelayResult<TxHash> {
        let resp = self
            .http
            .post(format!("{}/broadcast", self.base_url))
            .json(record)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, symbol = %record.symbol, "Broadcast request failed");
                RelayError::Transport(e)
            })?;

        let body: BroadcastResponse = self.read_json(resp, "broadcast").await?;
        Ok(body.tx_hash)
    }

    /// Fetch the current confirmation status for a handle.
    ///
    /// The status string is returned verbatim, including values this
    /// client has never heard of.
    pub async fn check_status(&self, hash: &TxHash) -> RelayResult<TxStatus> {
        let resp = self
            .http
            .get(format!("{}/check/{}", self.base_url, hash))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, tx_hash = %hash, "Status check request failed");
                RelayError::Transport(e)
            })?;

        let body: StatusResponse = self.read_json(resp, "check_status").await?;
        Ok(body.tx_status)
    }

    /// Poll [`check_status`](Self::check_status) until a terminal status.
    ///
    /// See [`StatusMonitor`] for the loop semantics.
    pub async fn monitor(&self, hash: &TxHash, settings: &MonitorSettings) -> RelayResult<TxStatus> {
        StatusMonitor::new(self.clone(), settings.clone())
            .wait_for_terminal(hash)
            .await
    }

    /// Turn a response into a decoded body or a typed error.
    ///
    /// Non-2xx statuses never reach the decoder; their bodies are ignored
    /// apart from diagnostics.
    async fn read_json<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
        operation: &'static str,
    ) -> RelayResult<T> {
        let status = resp.status();
        if !status.is_success() {
            tracing::error!(operation, status = %status, "Relay returned error status");
            return Err(RelayError::Remote {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let text = resp.text().await.map_err(|e| {
            tracing::error!(operation, error = %e, "Failed to read relay response body");
            RelayError::Transport(e)
        })?;

        serde_json::from_str(&text).map_err(|e| {
            tracing::error!(operation, error = %e, body = %text, "Failed to decode relay response");
            RelayError::Decode(e)
        })
    }
}

impl std::fmt::Debug for RelayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

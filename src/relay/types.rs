//! Relay-specific types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque transaction handle returned by the relay.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxHash(pub String);

impl TxHash {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TxHash {
    fn from(hash: String) -> Self {
        Self(hash)
    }
}

impl From<&str> for TxHash {
    fn from(hash: &str) -> Self {
        Self(hash.to_string())
    }
}

impl std::fmt::Display for TxHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Confirmation status reported by the relay.
///
/// The relay's status vocabulary is open-ended: anything other than the
/// known terminal values is treated as still in flight, so new
/// server-side statuses keep the monitor polling instead of breaking it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxStatus(pub String);

impl TxStatus {
    pub const PENDING: &'static str = "PENDING";
    pub const CONFIRMED: &'static str = "CONFIRMED";
    pub const FAILED: &'static str = "FAILED";
    pub const DNE: &'static str = "DNE";

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True once no further state change is expected.
    pub fn is_terminal(&self) -> bool {
        matches!(self.0.as_str(), Self::CONFIRMED | Self::FAILED | Self::DNE)
    }
}

impl From<&str> for TxStatus {
    fn from(status: &str) -> Self {
        Self(status.to_string())
    }
}

impl std::fmt::Display for TxStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A synthetic trade record submitted for broadcast.
///
/// Built fresh for every broadcast; the relay owns it afterwards and the
/// client keeps only the returned [`TxHash`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Ticker symbol, forwarded as-is (the relay enforces its own format).
    pub symbol: String,
    /// Integer price as entered by the user.
    pub price: i64,
    /// Submission time in epoch milliseconds.
    pub timestamp: i64,
}

/// Body of a successful broadcast response.
#[derive(Debug, Deserialize)]
pub struct BroadcastResponse {
    pub tx_hash: TxHash,
}

/// Body of a successful status-check response.
#[derive(Debug, Deserialize)]
pub struct StatusResponse {
    pub tx_status: TxStatus,
}

/// Errors that can occur while talking to the relay.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The request never completed (DNS, connect, timeout).
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The relay answered with a non-success status.
    #[error("relay returned {status} {status_text}")]
    Remote { status: u16, status_text: String },

    /// A success response body did not match the expected shape.
    #[error("failed to decode relay response: {0}")]
    Decode(#[from] serde_json::Error),

    /// User-supplied value rejected before any network call.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Monitoring gave up before a terminal status was observed.
    #[error("no terminal status after {attempts} polls")]
    ConfirmationTimeout { attempts: u64 },
}

/// Result type for relay operations.
pub type RelayResult<T> = Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_statuses() {
        assert!(TxStatus::from("CONFIRMED").is_terminal());
        assert!(TxStatus::from("FAILED").is_terminal());
        assert!(TxStatus::from("DNE").is_terminal());
        assert!(!TxStatus::from("PENDING").is_terminal());
    }

    #[test]
    fn test_unknown_status_is_not_terminal() {
        // Future server-side statuses must keep the monitor polling.
        assert!(!TxStatus::from("QUEUED").is_terminal());
        assert!(!TxStatus::from("confirmed").is_terminal());
        assert!(!TxStatus::from("").is_terminal());
    }

    #[test]
    fn test_status_round_trips_verbatim() {
        let status: TxStatus = serde_json::from_str("\"SOME_NEW_STATE\"").unwrap();
        assert_eq!(status.as_str(), "SOME_NEW_STATE");
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"SOME_NEW_STATE\"");
    }

    #[test]
    fn test_trade_record_serialization() {
        let record = TradeRecord {
            symbol: "BTC".to_string(),
            price: 50_000,
            timestamp: 1_700_000_000_000,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"symbol\":\"BTC\""));
        assert!(json.contains("\"price\":50000"));
        assert!(json.contains("\"timestamp\":1700000000000"));
    }

    #[test]
    fn test_error_display() {
        let err = RelayError::Remote {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("500"));
        assert!(rendered.contains("Internal Server Error"));

        let err = RelayError::ConfirmationTimeout { attempts: 3 };
        assert!(err.to_string().contains("3"));
    }

    #[test]
    fn test_broadcast_response_decoding() {
        let resp: BroadcastResponse = serde_json::from_str(r#"{"tx_hash":"0xabc123"}"#).unwrap();
        assert_eq!(resp.tx_hash.as_str(), "0xabc123");
    }
}

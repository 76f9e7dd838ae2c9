//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files,
//! and every field has a default so a missing or partial file still yields
//! a usable configuration.

use serde::{Deserialize, Serialize};

/// Default relay endpoint used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://mock-node-wgqbnxruha-as.a.run.app";

/// Root configuration for the relay client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Relay endpoint settings.
    pub relay: RelayConfig,

    /// Confirmation-monitoring settings.
    pub monitor: MonitorConfig,
}

/// Relay endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Base URL of the relay service.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Confirmation-monitoring configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Delay between consecutive status checks, in milliseconds.
    pub poll_interval_ms: u64,

    /// Optional cap on the number of status checks per monitoring run.
    pub max_attempts: Option<u64>,

    /// Optional wall-clock ceiling for a monitoring run, in seconds.
    pub deadline_secs: Option<u64>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 5000,
            max_attempts: None,
            deadline_secs: None,
        }
    }
}

//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (intervals and timeouts > 0)
//! - Check the relay URL before any network call is attempted
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ClientConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the program

use crate::config::schema::ClientConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The relay base URL could not be parsed or lacks a host.
    InvalidBaseUrl(String),
    /// A duration-like field was zero.
    ZeroDuration(&'static str),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBaseUrl(url) => write!(f, "invalid relay base URL '{}'", url),
            ValidationError::ZeroDuration(field) => write!(f, "{} must be greater than zero", field),
        }
    }
}

/// Check a deserialized configuration for semantic problems.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match config.relay.base_url.parse::<url::Url>() {
        Ok(parsed) if parsed.has_host() => {}
        _ => errors.push(ValidationError::InvalidBaseUrl(config.relay.base_url.clone())),
    }

    if config.relay.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroDuration("relay.request_timeout_secs"));
    }

    if config.monitor.poll_interval_ms == 0 {
        errors.push(ValidationError::ZeroDuration("monitor.poll_interval_ms"));
    }

    if config.monitor.max_attempts == Some(0) {
        errors.push(ValidationError::ZeroDuration("monitor.max_attempts"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ClientConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_malformed_base_url() {
        let mut config = ClientConfig::default();
        config.relay.base_url = "not a url".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = ClientConfig::default();
        config.relay.base_url = String::new();
        config.monitor.poll_interval_ms = 0;
        config.monitor.max_attempts = Some(0);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_zero_poll_interval_rejected() {
        let mut config = ClientConfig::default();
        config.monitor.poll_interval_ms = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::ZeroDuration("monitor.poll_interval_ms")]);
    }
}

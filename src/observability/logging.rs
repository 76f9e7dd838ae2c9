//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Default to crate-scoped info logging, overridable via RUST_LOG
//!
//! # Design Decisions
//! - Uses the tracing crate for structured diagnostics
//! - Shell output for humans stays on plain stdout; tracing carries
//!   everything meant for operators

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// Honors `RUST_LOG` when set; otherwise logs this crate at info level.
/// Calling it twice panics, so it belongs in main and nowhere else.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "relay_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

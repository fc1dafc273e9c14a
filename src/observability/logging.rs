//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Resolve log level from environment, CLI and config
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Logs go to stderr; stdout is reserved for operator lines
//! - `RUST_LOG` wins over configured levels

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter: `RUST_LOG` if set and valid, else `default_level` for this crate.
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("stats_watch={default_level}")))
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init_logging(default_level: &str) {
    let result = tracing_subscriber::registry()
        .with(build_filter(default_level))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();

    if let Err(e) = result {
        tracing::debug!(error = %e, "Logging already initialized");
    }
}

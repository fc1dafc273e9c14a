//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the endpoint URL is a usable http(s) address
//! - Validate value ranges (timeouts > 0, percentages within 0..=100)
//! - Reject log levels tracing would silently ignore
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AgentConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::AgentConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The endpoint URL does not parse.
    #[error("endpoint.url '{url}' is not a valid URL: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The endpoint URL uses a scheme the HTTP client cannot fetch.
    #[error("endpoint.url scheme '{0}' is not supported (expected http or https)")]
    UnsupportedScheme(String),

    /// A value that must be strictly positive is zero.
    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    /// The log level is not one tracing understands.
    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// A percentage threshold is outside 0..=100.
    #[error("{field} must be between 0 and 100, got {value}")]
    PercentOutOfRange { field: &'static str, value: i64 },
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Check every semantic constraint and collect all violations.
pub fn validate_config(config: &AgentConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.endpoint.url) {
        Ok(url) if url.scheme() != "http" && url.scheme() != "https" => {
            errors.push(ValidationError::UnsupportedScheme(url.scheme().to_string()));
        }
        Ok(_) => {}
        Err(e) => errors.push(ValidationError::InvalidUrl {
            url: config.endpoint.url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.endpoint.timeout_secs == 0 {
        errors.push(ValidationError::Zero("endpoint.timeout_secs"));
    }
    if config.poll.interval_ms == 0 {
        errors.push(ValidationError::Zero("poll.interval_ms"));
    }
    if config.poll.failure_threshold == 0 {
        errors.push(ValidationError::Zero("poll.failure_threshold"));
    }

    let percents = [
        ("thresholds.memory_percent", config.thresholds.memory_percent),
        ("thresholds.disk_percent", config.thresholds.disk_percent),
        ("thresholds.network_percent", config.thresholds.network_percent),
    ];
    for (field, value) in percents {
        if !(0..=100).contains(&value) {
            errors.push(ValidationError::PercentOutOfRange { field, value });
        }
    }

    let level = &config.observability.log_level;
    if !LOG_LEVELS.iter().any(|known| known.eq_ignore_ascii_case(level)) {
        errors.push(ValidationError::InvalidLogLevel(level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

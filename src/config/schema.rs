//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the agent.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::alerts::Thresholds;

/// Statistics endpoint polled when no URL is configured.
pub const DEFAULT_STATS_URL: &str = "http://srv.msk01.gigacorp.local/_stats";

/// Root configuration for the monitoring agent.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AgentConfig {
    /// Statistics endpoint settings.
    pub endpoint: EndpointConfig,

    /// Polling cadence and degraded-mode settings.
    pub poll: PollConfig,

    /// Alert thresholds.
    pub thresholds: Thresholds,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Statistics endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct EndpointConfig {
    /// URL of the statistics endpoint.
    pub url: String,

    /// Deadline for one request, including reading the body, in seconds.
    pub timeout_secs: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_STATS_URL.to_string(),
            timeout_secs: 3,
        }
    }
}

/// Polling configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PollConfig {
    /// Pause between the end of one tick and the start of the next, in milliseconds.
    pub interval_ms: u64,

    /// Number of consecutive failed fetches before the degraded notice is printed.
    pub failure_threshold: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            failure_threshold: 3,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

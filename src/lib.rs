//! Server statistics monitoring agent library.

pub mod alerts;
pub mod config;
pub mod lifecycle;
pub mod monitor;
pub mod observability;
pub mod stats;

pub use alerts::{Alert, Thresholds};
pub use config::AgentConfig;
pub use lifecycle::Shutdown;
pub use monitor::{Monitor, TickOutcome};
pub use stats::{FetchError, HttpFetcher, ServerStats, StatsSource};

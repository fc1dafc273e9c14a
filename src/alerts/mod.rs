//! Alert evaluation subsystem.
//!
//! # Data Flow
//! ```text
//! ServerStats
//!     → rules.rs (fixed-order threshold checks, pure)
//!     → Vec<Alert>
//!     → sink.rs (one line per alert on stdout)
//! ```
//!
//! # Design Decisions
//! - Evaluation is a pure function; printing is the caller's job
//! - No deduplication: the same breach is reported on every tick

pub mod rules;
pub mod sink;

pub use rules::{evaluate, Alert, Thresholds};
pub use sink::{OutputSink, StdoutSink};

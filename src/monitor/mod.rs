//! Monitoring loop subsystem.
//!
//! # Data Flow
//! ```text
//! poller.rs (one tick)
//!     → StatsSource::fetch
//!     → Ok:  alerts::evaluate → print alert lines → failures.rs reset
//!     → Err: print "Error: ..." → failures.rs increment
//!            → threshold reached: print degraded notice, reset
//!     → sleep interval (raced against shutdown)
//! ```
//!
//! # Design Decisions
//! - Every fetch error is soft; nothing in the loop is fatal
//! - No retry within a tick; the next tick is the retry
//! - Failure state is owned by the loop, not global

pub mod failures;
pub mod poller;

pub use failures::FailureCounter;
pub use poller::{Monitor, TickOutcome, DEGRADED_NOTICE};

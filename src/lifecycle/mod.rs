//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Parse CLI → Load config → Validate → Init logging → Build fetcher → Run monitor
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Broadcast → Monitor leaves loop → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger shutdown
//! ```
//!
//! # Design Decisions
//! - Startup errors (bad config) are fatal; nothing after startup is
//! - An in-flight request is abandoned on shutdown, not awaited

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;

//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events on stderr)
//!
//! Operator output (alerts, diagnostics) is not logging; it goes
//! through alerts::sink on stdout.
//! ```

pub mod logging;

pub use logging::init_logging;

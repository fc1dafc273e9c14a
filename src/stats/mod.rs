//! Statistics acquisition subsystem.
//!
//! # Data Flow
//! ```text
//! fetcher.rs
//!     → GET endpoint (bounded by deadline)
//!     → status check, body drained
//!     → types.rs (trim, split, parse 7 integers)
//!     → ServerStats | FetchError (error.rs)
//! ```

pub mod error;
pub mod fetcher;
pub mod types;

pub use error::{FetchError, FetchErrorKind, FetchResult};
pub use fetcher::{HttpFetcher, StatsSource};
pub use types::ServerStats;

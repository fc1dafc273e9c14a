//! Fetch error definitions.

use std::num::ParseIntError;
use thiserror::Error;

/// Errors that can occur while fetching server statistics.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be completed (DNS, connect, timeout).
    #[error("failed to fetch server stats: {0}")]
    Transport(String),

    /// The endpoint answered with something other than 200.
    #[error("unexpected status code: {0}")]
    BadStatus(u16),

    /// The response body could not be read to completion.
    #[error("failed to read response body: {0}")]
    ReadError(String),

    /// The body did not split into the expected number of fields.
    #[error("invalid data length: expected {expected}, got {actual}")]
    BadShape { expected: usize, actual: usize },

    /// A field was not a base-10 integer.
    #[error("invalid data format: {token:?} ({source})")]
    BadNumber {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

/// Tag identifying which class of fetch failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchErrorKind {
    Transport,
    BadStatus,
    ReadError,
    BadShape,
    BadNumber,
}

impl FetchError {
    /// Classify the error.
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Transport(_) => FetchErrorKind::Transport,
            FetchError::BadStatus(_) => FetchErrorKind::BadStatus,
            FetchError::ReadError(_) => FetchErrorKind::ReadError,
            FetchError::BadShape { .. } => FetchErrorKind::BadShape,
            FetchError::BadNumber { .. } => FetchErrorKind::BadNumber,
        }
    }
}

impl std::fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FetchErrorKind::Transport => "transport",
            FetchErrorKind::BadStatus => "bad_status",
            FetchErrorKind::ReadError => "read_error",
            FetchErrorKind::BadShape => "bad_shape",
            FetchErrorKind::BadNumber => "bad_number",
        };
        f.write_str(name)
    }
}

/// Result alias for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

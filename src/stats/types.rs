//! Server statistics record and wire parsing.
//!
//! The endpoint publishes one line of comma-separated integers:
//!
//! ```text
//! load, total_mem, used_mem, total_disk, used_disk, total_net, used_net
//! ```
//!
//! Memory and disk are bytes, network is bits per second. Units are not validated.

use std::str::FromStr;

use crate::stats::error::FetchError;

/// One snapshot of the statistics published by the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServerStats {
    pub load_average: i64,
    pub total_memory: i64,
    pub used_memory: i64,
    pub total_disk: i64,
    pub used_disk: i64,
    pub total_network: i64,
    pub used_network: i64,
}

impl ServerStats {
    /// Number of fields on the wire.
    pub const FIELD_COUNT: usize = 7;

    /// Parse a response body.
    ///
    /// Surrounding whitespace is ignored; anything else that is not exactly
    /// seven comma-separated base-10 integers is rejected.
    pub fn parse_body(body: &str) -> Result<Self, FetchError> {
        let tokens: Vec<&str> = body.trim().split(',').collect();
        if tokens.len() != Self::FIELD_COUNT {
            return Err(FetchError::BadShape {
                expected: Self::FIELD_COUNT,
                actual: tokens.len(),
            });
        }

        let mut values = [0i64; Self::FIELD_COUNT];
        for (slot, token) in values.iter_mut().zip(&tokens) {
            *slot = token.parse().map_err(|source| FetchError::BadNumber {
                token: (*token).to_string(),
                source,
            })?;
        }

        let [load_average, total_memory, used_memory, total_disk, used_disk, total_network, used_network] =
            values;

        Ok(Self {
            load_average,
            total_memory,
            used_memory,
            total_disk,
            used_disk,
            total_network,
            used_network,
        })
    }
}

impl FromStr for ServerStats {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_body(s)
    }
}

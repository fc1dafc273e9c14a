//! Statistics fetcher.
//!
//! # Responsibilities
//! - Issue one GET to the statistics endpoint per call
//! - Bound the whole exchange (connect, headers, body) with one deadline
//! - Classify every failure into a [`FetchError`]
//!
//! # Design Decisions
//! - The body is always read to completion, including on non-200 responses,
//!   so the pooled connection can be reused
//! - A timeout before headers is a transport failure; a timeout while
//!   reading a 200 body is a read error; a non-200 status always wins

use std::future::Future;
use std::time::Duration;
use reqwest::{Client, StatusCode};
use tokio::time::{timeout_at, Instant};

use crate::stats::error::{FetchError, FetchResult};
use crate::stats::types::ServerStats;

/// Something the monitor can pull one [`ServerStats`] snapshot from.
pub trait StatsSource {
    /// Perform one fetch.
    fn fetch(&self) -> impl Future<Output = FetchResult<ServerStats>> + Send;
}

/// HTTP implementation of [`StatsSource`].
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    url: String,
    deadline: Duration,
}

impl HttpFetcher {
    /// Create a fetcher for `url` with a per-request deadline.
    ///
    /// # Errors
    /// Returns `FetchError::Transport` if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, deadline: Duration) -> FetchResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("stats-watch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
            deadline,
        })
    }

    /// Endpoint this fetcher polls.
    pub fn url(&self) -> &str {
        &self.url
    }

    fn timed_out(&self) -> String {
        format!("timed out after {}s", self.deadline.as_secs_f64())
    }

    async fn fetch_body(&self) -> FetchResult<String> {
        let deadline = Instant::now() + self.deadline;

        let response = match timeout_at(deadline, self.client.get(&self.url).send()).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => return Err(FetchError::Transport(e.to_string())),
            Err(_) => {
                return Err(FetchError::Transport(format!(
                    "request {}",
                    self.timed_out()
                )))
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            // Drain so the connection goes back to the pool. The status is
            // reported whatever happens here.
            match timeout_at(deadline, response.bytes()).await {
                Ok(Ok(_)) => {}
                Ok(Err(e)) => tracing::debug!(error = %e, "Failed to drain error response body"),
                Err(_) => tracing::debug!("Timed out draining error response body"),
            }
            return Err(FetchError::BadStatus(status.as_u16()));
        }

        let bytes = match timeout_at(deadline, response.bytes()).await {
            Ok(Ok(bytes)) => bytes,
            Ok(Err(e)) => return Err(FetchError::ReadError(e.to_string())),
            Err(_) => return Err(FetchError::ReadError(format!("body {}", self.timed_out()))),
        };

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl StatsSource for HttpFetcher {
    async fn fetch(&self) -> FetchResult<ServerStats> {
        let body = self.fetch_body().await?;
        ServerStats::parse_body(&body)
    }
}

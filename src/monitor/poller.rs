//! Polling loop controller.
//!
//! # Responsibilities
//! - Fetch once per tick and evaluate the result
//! - Report fetch errors and count consecutive failures
//! - Print the degraded notice when the failure threshold is reached
//! - Sleep a fixed gap between ticks until shutdown

use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::sleep;

use crate::alerts::{evaluate, Alert, OutputSink, Thresholds};
use crate::monitor::failures::FailureCounter;
use crate::stats::StatsSource;

/// Line printed when the failure threshold is reached.
pub const DEGRADED_NOTICE: &str = "Unable to fetch server statistics after multiple attempts.";

/// What a single tick did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Stats were fetched and evaluated.
    Evaluated { alerts: Vec<Alert> },
    /// The fetch failed; `consecutive` failures so far.
    Failed { consecutive: u32 },
    /// The fetch failed and the degraded notice was printed.
    Degraded,
}

impl TickOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TickOutcome::Evaluated { .. })
    }
}

/// Drives a [`StatsSource`] on a fixed cadence.
pub struct Monitor<S, O> {
    source: S,
    output: O,
    thresholds: Thresholds,
    failures: FailureCounter,
    interval: Duration,
}

impl<S: StatsSource, O: OutputSink> Monitor<S, O> {
    pub fn new(
        source: S,
        output: O,
        thresholds: Thresholds,
        failure_threshold: u32,
        interval: Duration,
    ) -> Self {
        Self {
            source,
            output,
            thresholds,
            failures: FailureCounter::new(failure_threshold),
            interval,
        }
    }

    /// Consecutive failures recorded so far.
    pub fn consecutive_failures(&self) -> u32 {
        self.failures.consecutive()
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Run one fetch and its follow-up. Does not sleep.
    pub async fn tick(&mut self) -> TickOutcome {
        match self.source.fetch().await {
            Ok(stats) => {
                tracing::debug!(
                    load_average = stats.load_average,
                    total_memory = stats.total_memory,
                    used_memory = stats.used_memory,
                    total_disk = stats.total_disk,
                    used_disk = stats.used_disk,
                    total_network = stats.total_network,
                    used_network = stats.used_network,
                    "Fetched server statistics"
                );

                let alerts = evaluate(&stats, &self.thresholds);
                for alert in &alerts {
                    self.output.line(&alert.to_string());
                }
                self.failures.record_success();

                TickOutcome::Evaluated { alerts }
            }
            Err(e) => {
                tracing::warn!(kind = %e.kind(), error = %e, "Fetch failed");
                self.output.line(&format!("Error: {e}"));

                if self.failures.record_failure() {
                    tracing::error!(
                        threshold = self.failures.threshold(),
                        "Statistics unavailable after consecutive failures"
                    );
                    self.output.line(DEGRADED_NOTICE);
                    TickOutcome::Degraded
                } else {
                    TickOutcome::Failed {
                        consecutive: self.failures.consecutive(),
                    }
                }
            }
        }
    }

    /// Tick, pause, repeat until a shutdown signal arrives.
    ///
    /// The pause is a gap after each tick, not a fixed schedule: a slow
    /// request pushes the next one back.
    pub async fn run(&mut self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(interval = ?self.interval, "Monitor starting");

        loop {
            tokio::select! {
                _ = self.tick() => {}
                _ = shutdown.recv() => break,
            }

            tokio::select! {
                _ = sleep(self.interval) => {}
                _ = shutdown.recv() => break,
            }
        }

        tracing::info!("Monitor received shutdown signal, exiting loop");
    }
}

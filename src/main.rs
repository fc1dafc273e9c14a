//! Server statistics monitoring agent.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────┐
//!   │                       stats-watch                        │
//!   │                                                          │
//!   │  ┌─────────┐    ┌──────────┐    ┌────────┐    ┌────────┐ │
//!   │  │ monitor │───▶│  stats   │───▶│ alerts │───▶│ stdout │ │
//!   │  │  loop   │    │ fetcher  │    │ rules  │    │  sink  │ │
//!   │  └────┬────┘    └────┬─────┘    └────────┘    └────────┘ │
//!   │       │              │                                   │
//!   │       │              ▼                                   │
//!   │       │        GET /_stats ◀──────────────────────────── │ ─── endpoint
//!   │       ▼                                                  │
//!   │  failure counter → degraded notice                       │
//!   │                                                          │
//!   │  config · lifecycle · observability (stderr logs)        │
//!   └──────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use stats_watch::alerts::StdoutSink;
use stats_watch::config::{load_config, validate_config, AgentConfig, ConfigError};
use stats_watch::lifecycle::{signals, Shutdown};
use stats_watch::monitor::Monitor;
use stats_watch::observability::init_logging;
use stats_watch::stats::HttpFetcher;

#[derive(Parser)]
#[command(name = "stats-watch")]
#[command(about = "Polls a server statistics endpoint and prints threshold alerts", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Statistics endpoint URL (overrides the config file).
    #[arg(short, long)]
    url: Option<String>,

    /// Log level for stderr logs (overrides the config file).
    #[arg(long)]
    log_level: Option<String>,

    /// Run a single tick and exit; non-zero status if the fetch failed.
    #[arg(long)]
    once: bool,

    /// Print the effective configuration as TOML and exit.
    #[arg(long)]
    print_config: bool,
}

fn resolve_config(cli: &Cli) -> Result<AgentConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AgentConfig::default(),
    };

    if let Some(url) = &cli.url {
        config.endpoint.url = url.clone();
    }
    if let Some(level) = &cli.log_level {
        config.observability.log_level = level.clone();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    if cli.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(ExitCode::SUCCESS);
    }

    init_logging(&config.observability.log_level);

    let fetcher = HttpFetcher::new(
        config.endpoint.url.clone(),
        Duration::from_secs(config.endpoint.timeout_secs),
    )?;

    tracing::info!(
        url = %fetcher.url(),
        interval_ms = config.poll.interval_ms,
        timeout_secs = config.endpoint.timeout_secs,
        failure_threshold = config.poll.failure_threshold,
        "stats-watch v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let mut monitor = Monitor::new(
        fetcher,
        StdoutSink,
        config.thresholds,
        config.poll.failure_threshold,
        Duration::from_millis(config.poll.interval_ms),
    );

    if cli.once {
        let outcome = monitor.tick().await;
        return Ok(if outcome.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let shutdown = Shutdown::new();
    let monitor_shutdown = shutdown.subscribe();
    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        signals::trigger_on_signal(&signal_shutdown).await;
    });

    monitor.run(monitor_shutdown).await;

    tracing::info!("Shutdown complete");
    Ok(ExitCode::SUCCESS)
}

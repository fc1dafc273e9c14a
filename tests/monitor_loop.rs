//! End-to-end loop tests: mock endpoint → fetcher → monitor → captured output.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use stats_watch::alerts::Thresholds;
use stats_watch::lifecycle::Shutdown;
use stats_watch::monitor::{Monitor, TickOutcome, DEGRADED_NOTICE};
use stats_watch::stats::HttpFetcher;

mod common;

fn monitor_for(addr: std::net::SocketAddr) -> Monitor<HttpFetcher, Vec<String>> {
    let fetcher = HttpFetcher::new(common::stats_url(addr), Duration::from_secs(2)).unwrap();
    Monitor::new(
        fetcher,
        Vec::new(),
        Thresholds::default(),
        3,
        Duration::from_millis(20),
    )
}

async fn lines_for(body: &'static str) -> Vec<String> {
    let addr = common::start_stats_endpoint(body).await;
    let mut monitor = monitor_for(addr);
    assert!(monitor.tick().await.is_success());
    monitor.into_output()
}

#[tokio::test]
async fn test_alert_scenarios() {
    let cases: [(&str, &[&str]); 6] = [
        ("5,1000,500,1000,500,1000,500", &[]),
        ("31,100,10,100,10,100,10", &["Load Average is too high: 31"]),
        ("10,100,81,100,10,100,10", &["Memory usage too high: 81%"]),
        (
            "10,100,10,1048576000,1048000000,100,10",
            &["Free disk space is too low: 0 Mb left"],
        ),
        (
            "10,100,10,100,10,1000000000,950000000",
            &["Network bandwidth usage high: 50 Mbit/s available"],
        ),
        (
            "40,100,90,100,95,1000000000,999000000",
            &[
                "Load Average is too high: 40",
                "Memory usage too high: 90%",
                "Free disk space is too low: 0 Mb left",
                "Network bandwidth usage high: 1 Mbit/s available",
            ],
        ),
    ];

    for (body, expected) in cases {
        assert_eq!(lines_for(body).await, expected, "body {body}");
    }
}

#[tokio::test]
async fn test_three_server_errors_then_degraded_notice() {
    let addr = common::start_programmable_endpoint(|| async {
        (500, "Internal Server Error".to_string())
    })
    .await;
    let mut monitor = monitor_for(addr);

    assert_eq!(monitor.tick().await, TickOutcome::Failed { consecutive: 1 });
    assert_eq!(monitor.tick().await, TickOutcome::Failed { consecutive: 2 });
    assert_eq!(monitor.tick().await, TickOutcome::Degraded);
    assert_eq!(monitor.consecutive_failures(), 0);

    assert_eq!(
        monitor.into_output(),
        [
            "Error: unexpected status code: 500",
            "Error: unexpected status code: 500",
            "Error: unexpected status code: 500",
            DEGRADED_NOTICE,
        ]
    );
}

#[tokio::test]
async fn test_recovery_after_two_failures() {
    let calls = Arc::new(AtomicU32::new(0));
    let counter = calls.clone();
    let addr = common::start_programmable_endpoint(move || {
        let counter = counter.clone();
        async move {
            if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                (503, String::new())
            } else {
                (200, "31,100,10,100,10,100,10".to_string())
            }
        }
    })
    .await;
    let mut monitor = monitor_for(addr);

    monitor.tick().await;
    monitor.tick().await;
    assert_eq!(monitor.consecutive_failures(), 2);

    assert!(monitor.tick().await.is_success());
    assert_eq!(monitor.consecutive_failures(), 0);

    let output = monitor.into_output();
    assert_eq!(output.len(), 3);
    assert_eq!(output[2], "Load Average is too high: 31");
    assert!(!output.iter().any(|l| l == DEGRADED_NOTICE));
}

#[tokio::test]
async fn test_run_polls_until_shutdown() {
    let calls = Arc::new(AtomicU32::new(0));
    let counter = calls.clone();
    let addr = common::start_programmable_endpoint(move || {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            (200, "5,1000,500,1000,500,1000,500".to_string())
        }
    })
    .await;
    let mut monitor = monitor_for(addr);

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let trigger = shutdown.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(300)).await;
        trigger.trigger();
    });

    tokio::time::timeout(Duration::from_secs(5), monitor.run(rx))
        .await
        .expect("monitor did not stop on shutdown");

    let polled = calls.load(Ordering::SeqCst);
    assert!(polled >= 2, "expected repeated polling, got {polled}");
    assert!(monitor.output().is_empty());
}

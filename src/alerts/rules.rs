//! Threshold rules.
//!
//! Rules run in a fixed order and are independent of each other:
//!
//! | # | Fires when                           | Reports                  |
//! |---|--------------------------------------|--------------------------|
//! | 1 | load > `load_average`                | load                     |
//! | 2 | used_mem * 100 / total_mem > limit   | usage percent            |
//! | 3 | used_disk * 100 / total_disk > limit | free MiB                 |
//! | 4 | used_net * 100 / total_net > limit   | free Mbit/s              |
//!
//! All arithmetic is truncating integer division. A resource whose total is
//! not positive is treated as unreported and its rule is skipped.

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::stats::ServerStats;

const BYTES_PER_MB: i128 = 1024 * 1024;
const BITS_PER_MBIT: i128 = 1_000_000;

/// Alert thresholds. Every comparison is strictly greater-than.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Thresholds {
    /// Load average above which an alert fires.
    pub load_average: i64,
    /// Memory usage percentage above which an alert fires.
    pub memory_percent: i64,
    /// Disk usage percentage above which an alert fires.
    pub disk_percent: i64,
    /// Network usage percentage above which an alert fires.
    pub network_percent: i64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            load_average: 30,
            memory_percent: 80,
            disk_percent: 90,
            network_percent: 90,
        }
    }
}

/// A threshold breach. `Display` renders the operator-facing line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    LoadAverage { load: i64 },
    MemoryUsage { percent: i128 },
    DiskSpaceLow { free_mb: i128 },
    NetworkBandwidth { free_mbit: i128 },
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alert::LoadAverage { load } => write!(f, "Load Average is too high: {load}"),
            Alert::MemoryUsage { percent } => write!(f, "Memory usage too high: {percent}%"),
            Alert::DiskSpaceLow { free_mb } => {
                write!(f, "Free disk space is too low: {free_mb} Mb left")
            }
            Alert::NetworkBandwidth { free_mbit } => {
                write!(f, "Network bandwidth usage high: {free_mbit} Mbit/s available")
            }
        }
    }
}

/// Usage percentage, or `None` when the resource is not reported.
///
/// Widened so `used * 100` cannot overflow for any `i64` input.
fn usage_percent(used: i64, total: i64) -> Option<i128> {
    if total <= 0 {
        return None;
    }
    Some(i128::from(used) * 100 / i128::from(total))
}

fn headroom(total: i64, used: i64) -> i128 {
    i128::from(total) - i128::from(used)
}

/// Evaluate every rule against `stats`, in rule order.
pub fn evaluate(stats: &ServerStats, thresholds: &Thresholds) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if stats.load_average > thresholds.load_average {
        alerts.push(Alert::LoadAverage {
            load: stats.load_average,
        });
    }

    if let Some(percent) = usage_percent(stats.used_memory, stats.total_memory) {
        if percent > i128::from(thresholds.memory_percent) {
            alerts.push(Alert::MemoryUsage { percent });
        }
    }

    if let Some(percent) = usage_percent(stats.used_disk, stats.total_disk) {
        if percent > i128::from(thresholds.disk_percent) {
            alerts.push(Alert::DiskSpaceLow {
                free_mb: headroom(stats.total_disk, stats.used_disk) / BYTES_PER_MB,
            });
        }
    }

    if let Some(percent) = usage_percent(stats.used_network, stats.total_network) {
        if percent > i128::from(thresholds.network_percent) {
            alerts.push(Alert::NetworkBandwidth {
                free_mbit: headroom(stats.total_network, stats.used_network) / BITS_PER_MBIT,
            });
        }
    }

    alerts
}

//! Process-wide observability collector.
//!
//! Counts invocations, failures and latency per domain. Keys are free-form
//! so the router can also track the classifier and unclear requests.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::domain::journey::DomainMetrics;

/// Aggregates per-domain counters across all users. Never fails.
#[derive(Debug, Default)]
pub struct ObservabilityCollector {
    domains: Mutex<BTreeMap<String, DomainMetrics>>,
}

impl ObservabilityCollector {
    pub fn new() -> Self {
        Self::default()
    }

    fn domains(&self) -> MutexGuard<'_, BTreeMap<String, DomainMetrics>> {
        self.domains.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records a successful invocation.
    pub fn record(&self, domain: &str, latency: Duration) {
        self.domains()
            .entry(domain.to_string())
            .or_default()
            .record(latency);
    }

    /// Records a failed invocation.
    pub fn record_failure(&self, domain: &str, latency: Duration) {
        self.domains()
            .entry(domain.to_string())
            .or_default()
            .record_failure(latency);
    }

    /// Read-only copy of all counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        let domains = self
            .domains()
            .iter()
            .map(|(name, metrics)| (name.clone(), DomainStats::from(metrics)))
            .collect();
        MetricsSnapshot { domains }
    }
}

/// Counters for one domain, latencies in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainStats {
    pub count: u64,
    pub failures: u64,
    pub successes: u64,
    pub total_latency_ms: f64,
    pub average_latency_ms: Option<f64>,
    pub last_latency_ms: Option<f64>,
}

impl From<&DomainMetrics> for DomainStats {
    fn from(metrics: &DomainMetrics) -> Self {
        Self {
            count: metrics.count,
            failures: metrics.failures,
            successes: metrics.successes(),
            total_latency_ms: as_millis(metrics.total_latency),
            average_latency_ms: metrics.average_latency().map(as_millis),
            last_latency_ms: metrics.last_latency.map(as_millis),
        }
    }
}

fn as_millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000.0
}

/// Point-in-time copy of the collector.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub domains: BTreeMap<String, DomainStats>,
}

impl MetricsSnapshot {
    pub fn get(&self, domain: &str) -> Option<&DomainStats> {
        self.domains.get(domain)
    }

    pub fn total_requests(&self) -> u64 {
        self.domains.values().map(|stats| stats.count).sum()
    }

    pub fn total_failures(&self) -> u64 {
        self.domains.values().map(|stats| stats.failures).sum()
    }
}

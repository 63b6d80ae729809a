//! Invocation counters and latency samples for one domain.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Counters for one domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainMetrics {
    /// Invocations, successful or not.
    pub count: u64,
    /// Invocations that ended in a dispatch failure.
    pub failures: u64,
    pub total_latency: Duration,
    pub last_latency: Option<Duration>,
}

impl DomainMetrics {
    /// Records a successful invocation.
    pub fn record(&mut self, latency: Duration) {
        self.count += 1;
        self.total_latency += latency;
        self.last_latency = Some(latency);
    }

    /// Records a failed invocation.
    pub fn record_failure(&mut self, latency: Duration) {
        self.record(latency);
        self.failures += 1;
    }

    pub fn successes(&self) -> u64 {
        self.count - self.failures
    }

    /// Mean latency across all invocations.
    pub fn average_latency(&self) -> Option<Duration> {
        match u32::try_from(self.count) {
            Ok(count) => self.total_latency.checked_div(count),
            Err(_) => Some(Duration::from_secs_f64(
                self.total_latency.as_secs_f64() / self.count as f64,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_accumulates_latency() {
        let mut metrics = DomainMetrics::default();
        metrics.record(Duration::from_millis(10));
        metrics.record(Duration::from_millis(30));

        assert_eq!(metrics.count, 2);
        assert_eq!(metrics.total_latency, Duration::from_millis(40));
        assert_eq!(metrics.last_latency, Some(Duration::from_millis(30)));
        assert_eq!(metrics.average_latency(), Some(Duration::from_millis(20)));
    }

    #[test]
    fn failures_count_as_invocations() {
        let mut metrics = DomainMetrics::default();
        metrics.record(Duration::from_millis(5));
        metrics.record_failure(Duration::from_millis(7));

        assert_eq!(metrics.count, 2);
        assert_eq!(metrics.failures, 1);
        assert_eq!(metrics.successes(), 1);
    }

    #[test]
    fn average_survives_counts_beyond_u32() {
        let metrics = DomainMetrics {
            count: u64::from(u32::MAX) + 1,
            failures: 0,
            total_latency: Duration::from_secs(u64::from(u32::MAX) + 1),
            last_latency: None,
        };
        assert_eq!(metrics.average_latency(), Some(Duration::from_secs(1)));
    }

    #[test]
    fn average_of_empty_is_none() {
        assert_eq!(DomainMetrics::default().average_latency(), None);
    }
}

//! Half-window mean comparison.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fewer entries than this yield `InsufficientData`.
pub const MIN_TREND_ENTRIES: usize = 4;

/// Direction of the recent emotional trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
    InsufficientData,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Improving => "improving",
            Trend::Declining => "declining",
            Trend::Stable => "stable",
            Trend::InsufficientData => "insufficient_data",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of comparing the earlier and recent halves of the history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendAnalysis {
    pub trend: Trend,
    /// Mean of the earlier half; `None` with insufficient data.
    pub earlier_mean: Option<f64>,
    /// Mean of the recent half; `None` with insufficient data.
    pub recent_mean: Option<f64>,
}

/// Classifies a chronological score sequence (oldest first).
///
/// The earlier half is the first `n / 2` scores and the recent half the
/// rest, so an odd middle element counts as recent. The recent mean must
/// beat the earlier mean by more than `epsilon` to count as a change.
pub fn analyze(scores: &[u8], epsilon: f64) -> TrendAnalysis {
    if scores.len() < MIN_TREND_ENTRIES {
        return TrendAnalysis {
            trend: Trend::InsufficientData,
            earlier_mean: None,
            recent_mean: None,
        };
    }

    let (earlier, recent) = scores.split_at(scores.len() / 2);
    let earlier_mean = mean(earlier);
    let recent_mean = mean(recent);
    let delta = recent_mean - earlier_mean;

    let trend = if delta > epsilon {
        Trend::Improving
    } else if delta < -epsilon {
        Trend::Declining
    } else {
        Trend::Stable
    };

    TrendAnalysis {
        trend,
        earlier_mean: Some(earlier_mean),
        recent_mean: Some(recent_mean),
    }
}

fn mean(values: &[u8]) -> f64 {
    let sum: u32 = values.iter().map(|v| u32::from(*v)).sum();
    f64::from(sum) / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 0.5;

    #[test]
    fn falling_scores_are_declining() {
        assert_eq!(analyze(&[8, 8, 8, 2, 2, 2], EPS).trend, Trend::Declining);
    }

    #[test]
    fn rising_scores_are_improving() {
        assert_eq!(analyze(&[2, 2, 2, 8, 8, 8], EPS).trend, Trend::Improving);
    }

    #[test]
    fn equal_scores_are_stable() {
        let analysis = analyze(&[5, 5, 5, 5, 5], EPS);
        assert_eq!(analysis.trend, Trend::Stable);
        assert_eq!(analysis.recent_mean, Some(5.0));
    }

    #[test]
    fn fewer_than_four_entries_is_insufficient() {
        assert_eq!(analyze(&[], EPS).trend, Trend::InsufficientData);
        assert_eq!(analyze(&[1, 9, 1], EPS).trend, Trend::InsufficientData);
    }

    #[test]
    fn change_within_epsilon_is_stable() {
        // earlier mean 5.0, recent mean 5.5
        assert_eq!(analyze(&[5, 5, 5, 6], EPS).trend, Trend::Stable);
        assert_eq!(analyze(&[5, 5, 5, 6], 0.4).trend, Trend::Improving);
    }

    #[test]
    fn odd_length_puts_middle_in_recent_half() {
        // earlier [6, 6], recent [4, 4, 4]
        let analysis = analyze(&[6, 6, 4, 4, 4], EPS);
        assert_eq!(analysis.earlier_mean, Some(6.0));
        assert_eq!(analysis.recent_mean, Some(4.0));
        assert_eq!(analysis.trend, Trend::Declining);
    }
}

//! Wellness engine configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::journey::{JourneyLimits, MAX_HISTORY_CAPACITY};
use crate::domain::trend::{CooldownPolicy, TrendSettings};

/// Trend, intervention and anti-repetition tuning
#[derive(Debug, Clone, Deserialize)]
pub struct WellnessConfig {
    /// Mood entries kept per user
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// Minimum mean difference between history halves that counts as a trend
    #[serde(default = "default_trend_epsilon")]
    pub trend_epsilon: f64,

    /// Mood scores below this may trigger a proactive intervention
    #[serde(default = "default_intervention_threshold")]
    pub intervention_threshold: u8,

    /// Fixed cooldown between interventions; unset means once per calendar day
    pub intervention_cooldown_secs: Option<u64>,

    /// Recently served items excluded from selection, per category
    #[serde(default = "default_repetition_window")]
    pub repetition_window: usize,
}

impl WellnessConfig {
    pub fn trend_settings(&self) -> TrendSettings {
        TrendSettings {
            epsilon: self.trend_epsilon,
            intervention_threshold: self.intervention_threshold,
            cooldown: self
                .intervention_cooldown_secs
                .map(|secs| CooldownPolicy::Fixed(Duration::from_secs(secs)))
                .unwrap_or_default(),
        }
    }

    pub fn journey_limits(&self) -> JourneyLimits {
        JourneyLimits {
            history_capacity: self.history_capacity,
            repetition_window: self.repetition_window,
        }
    }

    /// Validate wellness configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.history_capacity == 0 || self.history_capacity > MAX_HISTORY_CAPACITY {
            return Err(ValidationError::InvalidHistoryCapacity {
                max: MAX_HISTORY_CAPACITY,
                actual: self.history_capacity,
            });
        }
        if !self.trend_epsilon.is_finite() || self.trend_epsilon < 0.0 {
            return Err(ValidationError::InvalidTrendEpsilon(self.trend_epsilon));
        }
        if !(1..=10).contains(&self.intervention_threshold) {
            return Err(ValidationError::InvalidInterventionThreshold(
                self.intervention_threshold,
            ));
        }
        Ok(())
    }
}

impl Default for WellnessConfig {
    fn default() -> Self {
        Self {
            history_capacity: default_history_capacity(),
            trend_epsilon: default_trend_epsilon(),
            intervention_threshold: default_intervention_threshold(),
            intervention_cooldown_secs: None,
            repetition_window: default_repetition_window(),
        }
    }
}

fn default_history_capacity() -> usize {
    MAX_HISTORY_CAPACITY
}

fn default_trend_epsilon() -> f64 {
    0.5
}

fn default_intervention_threshold() -> u8 {
    4
}

fn default_repetition_window() -> usize {
    10
}

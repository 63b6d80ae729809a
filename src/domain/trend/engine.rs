//! Mood recording and proactive intervention decisions.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::analysis::{analyze, Trend, TrendAnalysis};
use crate::domain::foundation::{Timestamp, ValidationError};
use crate::domain::journey::{MoodEntry, MoodScore, UserJourney};

/// How long a raised intervention suppresses the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CooldownPolicy {
    /// At most one intervention per UTC calendar day.
    #[default]
    SameCalendarDay,
    /// At least this much time between interventions.
    Fixed(Duration),
}

impl CooldownPolicy {
    /// Returns true if a new intervention may be raised at `now`.
    pub fn allows(&self, last: Option<Timestamp>, now: Timestamp) -> bool {
        let Some(last) = last else {
            return true;
        };
        match self {
            CooldownPolicy::SameCalendarDay => !last.is_same_day(&now),
            CooldownPolicy::Fixed(window) => match now.duration_since(&last).to_std() {
                Ok(elapsed) => elapsed >= *window,
                // Clock went backwards: stay quiet.
                Err(_) => false,
            },
        }
    }
}

/// Tunable parameters of the trend engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendSettings {
    /// Minimum mean difference between halves that counts as a change.
    pub epsilon: f64,
    /// Scores strictly below this are considered at risk.
    pub intervention_threshold: u8,
    pub cooldown: CooldownPolicy,
}

impl Default for TrendSettings {
    fn default() -> Self {
        Self {
            epsilon: 0.5,
            intervention_threshold: 4,
            cooldown: CooldownPolicy::SameCalendarDay,
        }
    }
}

/// Why a proactive intervention was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterventionReason {
    /// Low score on a declining trajectory.
    DecliningTrend,
    /// Low score with the recent average also low.
    PersistentlyLow,
}

/// Instruction to the router to additionally invoke stress relief.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InterventionSignal {
    pub reason: InterventionReason,
    pub latest_score: MoodScore,
    pub triggered_at: Timestamp,
}

/// Outcome of recording one mood check-in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodRecording {
    pub entry: MoodEntry,
    pub analysis: TrendAnalysis,
    pub intervention: Option<InterventionSignal>,
}

impl MoodRecording {
    pub fn trend(&self) -> Trend {
        self.analysis.trend
    }
}

/// Maintains mood history and decides on proactive interventions.
#[derive(Debug, Clone, Default)]
pub struct TrendEngine {
    settings: TrendSettings,
}

impl TrendEngine {
    pub fn new(settings: TrendSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &TrendSettings {
        &self.settings
    }

    /// Records a mood score and evaluates the intervention trigger.
    ///
    /// An out-of-range score is rejected before anything is written.
    /// On success the entry is appended (evicting the oldest when full)
    /// and, if an intervention is raised, `last_intervention_at` is set.
    pub fn record_mood(
        &self,
        journey: &mut UserJourney,
        score: i32,
        signal_count: u32,
        now: Timestamp,
    ) -> Result<MoodRecording, ValidationError> {
        let score = MoodScore::new(score)?;
        let entry = MoodEntry::new(now, score, signal_count);
        journey.push_mood(entry.clone());

        let analysis = self.analyze(journey);
        let intervention = self.evaluate_intervention(journey, score, &analysis, now);
        if let Some(signal) = &intervention {
            journey.mark_intervention(signal.triggered_at);
        }

        Ok(MoodRecording {
            entry,
            analysis,
            intervention,
        })
    }

    /// Records a self-reported stress level alongside the mood history.
    ///
    /// Levels outside 1..=10 are rejected before anything is written.
    pub fn record_stress(&self, journey: &mut UserJourney, level: u8) -> Result<(), ValidationError> {
        if !(1..=10).contains(&level) {
            return Err(ValidationError::out_of_range("stress_level", 1, 10, i32::from(level)));
        }
        journey.push_stress(level);
        Ok(())
    }

    /// Classifies the journey's current history without modifying it.
    pub fn analyze(&self, journey: &UserJourney) -> TrendAnalysis {
        let scores: Vec<u8> = journey
            .mood_history()
            .iter()
            .map(|entry| entry.score().value())
            .collect();
        analyze(&scores, self.settings.epsilon)
    }

    fn evaluate_intervention(
        &self,
        journey: &UserJourney,
        latest: MoodScore,
        analysis: &TrendAnalysis,
        now: Timestamp,
    ) -> Option<InterventionSignal> {
        let threshold = self.settings.intervention_threshold;
        if latest.value() >= threshold {
            return None;
        }

        let reason = match analysis.trend {
            Trend::Declining => InterventionReason::DecliningTrend,
            Trend::Stable
                if analysis
                    .recent_mean
                    .is_some_and(|mean| mean < f64::from(threshold)) =>
            {
                InterventionReason::PersistentlyLow
            }
            _ => return None,
        };

        if !self
            .settings
            .cooldown
            .allows(journey.last_intervention_at(), now)
        {
            return None;
        }

        Some(InterventionSignal {
            reason,
            latest_score: latest,
            triggered_at: now,
        })
    }
}

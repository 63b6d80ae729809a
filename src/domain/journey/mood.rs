//! Mood scores and history entries.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Timestamp, ValidationError};

/// A mood score on the 1-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoodScore(u8);

impl MoodScore {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 10;

    /// Creates a score, rejecting values outside [1, 10].
    pub fn new(value: i32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "mood_score",
                Self::MIN,
                Self::MAX,
                value,
            ));
        }
        Ok(Self(value as u8))
    }

    /// Creates a score, clamping into [1, 10].
    pub fn clamped(value: i32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> MoodLabel {
        MoodLabel::for_score(*self)
    }

    pub fn assessment(&self) -> Assessment {
        Assessment::for_score(*self)
    }
}

impl fmt::Display for MoodScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

/// Emotion label derived from the score band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodLabel {
    Distressed,
    Anxious,
    Sad,
    Neutral,
    Stable,
    Positive,
    VeryPositive,
    Excellent,
}

impl MoodLabel {
    pub fn for_score(score: MoodScore) -> Self {
        match score.value() {
            0..=2 => MoodLabel::Distressed,
            3 => MoodLabel::Anxious,
            4 => MoodLabel::Sad,
            5 => MoodLabel::Neutral,
            6 => MoodLabel::Stable,
            7 => MoodLabel::Positive,
            8 => MoodLabel::VeryPositive,
            _ => MoodLabel::Excellent,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLabel::Distressed => "distressed",
            MoodLabel::Anxious => "anxious",
            MoodLabel::Sad => "sad",
            MoodLabel::Neutral => "neutral",
            MoodLabel::Stable => "stable",
            MoodLabel::Positive => "positive",
            MoodLabel::VeryPositive => "very_positive",
            MoodLabel::Excellent => "excellent",
        }
    }
}

/// Support tier implied by a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Assessment {
    NeedsImmediateSupport,
    NeedsSupport,
    Stable,
    Thriving,
}

impl Assessment {
    pub fn for_score(score: MoodScore) -> Self {
        match score.value() {
            0..=2 => Assessment::NeedsImmediateSupport,
            3..=4 => Assessment::NeedsSupport,
            5..=6 => Assessment::Stable,
            _ => Assessment::Thriving,
        }
    }
}

/// One recorded mood check-in. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodEntry {
    recorded_at: Timestamp,
    score: MoodScore,
    signal_count: u32,
    label: MoodLabel,
}

impl MoodEntry {
    pub fn new(recorded_at: Timestamp, score: MoodScore, signal_count: u32) -> Self {
        Self {
            recorded_at,
            score,
            signal_count,
            label: score.label(),
        }
    }

    pub fn recorded_at(&self) -> Timestamp {
        self.recorded_at
    }

    pub fn score(&self) -> MoodScore {
        self.score
    }

    /// Number of emotional signals the upstream classifier matched.
    pub fn signal_count(&self) -> u32 {
        self.signal_count
    }

    pub fn label(&self) -> MoodLabel {
        self.label
    }
}

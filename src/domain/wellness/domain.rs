//! Wellness domain tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the seven capability areas a request can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WellnessDomain {
    Mood,
    StressRelief,
    Communication,
    MealPlanning,
    Tasks,
    Nutrition,
    ContentAnalysis,
}

impl WellnessDomain {
    /// All domains in routing order.
    pub const ALL: [WellnessDomain; 7] = [
        WellnessDomain::Mood,
        WellnessDomain::StressRelief,
        WellnessDomain::Communication,
        WellnessDomain::MealPlanning,
        WellnessDomain::Tasks,
        WellnessDomain::Nutrition,
        WellnessDomain::ContentAnalysis,
    ];

    /// Stable key used for streaks, metrics and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            WellnessDomain::Mood => "mood",
            WellnessDomain::StressRelief => "stress_relief",
            WellnessDomain::Communication => "communication",
            WellnessDomain::MealPlanning => "meal_planning",
            WellnessDomain::Tasks => "tasks",
            WellnessDomain::Nutrition => "nutrition",
            WellnessDomain::ContentAnalysis => "content_analysis",
        }
    }

    /// Human-readable capability description.
    pub fn label(&self) -> &'static str {
        match self {
            WellnessDomain::Mood => "mood check-ins",
            WellnessDomain::StressRelief => "stress-relief games",
            WellnessDomain::Communication => "communication coaching",
            WellnessDomain::MealPlanning => "meal planning",
            WellnessDomain::Tasks => "task organization",
            WellnessDomain::Nutrition => "nutrition advice",
            WellnessDomain::ContentAnalysis => "document summaries",
        }
    }
}

impl fmt::Display for WellnessDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WellnessDomain {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WellnessDomain::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ValidationError::invalid_format("domain", format!("unknown domain '{}'", s)))
    }
}

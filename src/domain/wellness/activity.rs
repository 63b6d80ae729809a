//! Activity types and their fixed point values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::WellnessDomain;
use crate::domain::foundation::ValidationError;

/// A completed activity that earns points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    MoodCheckIn,
    StressGame,
    NutritionAdvice,
    CommunicationAnalysis,
    TaskPlanning,
    MealPlanning,
    DocumentSummary,
}

impl ActivityType {
    /// Fixed point value awarded per completion.
    pub fn points(&self) -> u64 {
        match self {
            ActivityType::MoodCheckIn => 5,
            ActivityType::StressGame => 10,
            ActivityType::NutritionAdvice => 10,
            ActivityType::CommunicationAnalysis => 15,
            ActivityType::TaskPlanning => 15,
            ActivityType::MealPlanning => 25,
            ActivityType::DocumentSummary => 30,
        }
    }

    /// The domain whose streak and counters this activity feeds.
    pub fn domain(&self) -> WellnessDomain {
        match self {
            ActivityType::MoodCheckIn => WellnessDomain::Mood,
            ActivityType::StressGame => WellnessDomain::StressRelief,
            ActivityType::NutritionAdvice => WellnessDomain::Nutrition,
            ActivityType::CommunicationAnalysis => WellnessDomain::Communication,
            ActivityType::TaskPlanning => WellnessDomain::Tasks,
            ActivityType::MealPlanning => WellnessDomain::MealPlanning,
            ActivityType::DocumentSummary => WellnessDomain::ContentAnalysis,
        }
    }

    /// The activity a successful completion in `domain` counts as.
    pub fn for_domain(domain: WellnessDomain) -> Self {
        match domain {
            WellnessDomain::Mood => ActivityType::MoodCheckIn,
            WellnessDomain::StressRelief => ActivityType::StressGame,
            WellnessDomain::Nutrition => ActivityType::NutritionAdvice,
            WellnessDomain::Communication => ActivityType::CommunicationAnalysis,
            WellnessDomain::Tasks => ActivityType::TaskPlanning,
            WellnessDomain::MealPlanning => ActivityType::MealPlanning,
            WellnessDomain::ContentAnalysis => ActivityType::DocumentSummary,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::MoodCheckIn => "mood_check_in",
            ActivityType::StressGame => "stress_game",
            ActivityType::NutritionAdvice => "nutrition_advice",
            ActivityType::CommunicationAnalysis => "communication_analysis",
            ActivityType::TaskPlanning => "task_planning",
            ActivityType::MealPlanning => "meal_planning",
            ActivityType::DocumentSummary => "document_summary",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WellnessDomain::ALL
            .into_iter()
            .map(ActivityType::for_domain)
            .find(|a| a.as_str() == s)
            .ok_or_else(|| ValidationError::unknown_activity(s))
    }
}

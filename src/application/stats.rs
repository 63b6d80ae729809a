//! Per-user progress report.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::foundation::UserId;
use crate::domain::gamification::Level;
use crate::domain::journey::UserJourney;
use crate::domain::wellness::WellnessDomain;

/// One user's progress, as shown by `:stats`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    pub user_id: UserId,
    pub name: String,
    pub level: Level,
    pub total_points: u64,
    pub badges: Vec<String>,
    /// Current streak length per domain with any activity.
    pub streaks: BTreeMap<WellnessDomain, u32>,
    /// Mood entries still held in the history window.
    pub total_moods_tracked: usize,
    pub total_games_played: u64,
    pub member_since: NaiveDate,
}

impl From<&UserJourney> for UserStats {
    fn from(journey: &UserJourney) -> Self {
        Self {
            user_id: journey.user_id().clone(),
            name: journey.display_name().to_string(),
            level: Level::for_points(journey.points()),
            total_points: journey.points(),
            badges: journey.badges().iter().cloned().collect(),
            streaks: journey
                .streaks()
                .iter()
                .map(|(domain, streak)| (*domain, streak.length()))
                .collect(),
            total_moods_tracked: journey.mood_history().len(),
            total_games_played: journey.activity_count(WellnessDomain::StressRelief),
            member_since: journey.created_at().date(),
        }
    }
}

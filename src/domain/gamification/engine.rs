//! Points, streak and badge awards.

use serde::Serialize;

use super::badges::{badges_for, Badge};
use super::level::Level;
use crate::domain::foundation::{Timestamp, ValidationError};
use crate::domain::journey::{StreakChange, UserJourney};
use crate::domain::wellness::ActivityType;

/// What one award changed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AwardOutcome {
    pub activity: ActivityType,
    pub points_earned: u64,
    pub total_points: u64,
    pub streak_length: u32,
    pub streak_change: StreakChange,
    /// Badges unlocked by this award only.
    pub new_badges: Vec<Badge>,
    /// Set when this award crossed into a new level.
    pub level_up: Option<Level>,
}

/// Awards points, maintains streaks and unlocks badges.
#[derive(Debug, Clone, Default)]
pub struct GamificationEngine;

impl GamificationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Awards a completed activity.
    ///
    /// 1. Adds the activity's fixed point value
    /// 2. Records today in the domain's streak
    /// 3. Bumps the domain counter and unlocks any badge whose threshold is
    ///    now met and which is not yet held
    pub fn award(&self, journey: &mut UserJourney, activity: ActivityType, now: Timestamp) -> AwardOutcome {
        let domain = activity.domain();
        let level_before = Level::for_points(journey.points());

        let points_earned = activity.points();
        journey.add_points(points_earned);

        let (streak_length, streak_change) = journey.record_streak(domain, now);

        let count = journey.increment_activity(domain);
        let new_badges: Vec<Badge> = badges_for(domain)
            .filter(|badge| count >= badge.threshold)
            .filter(|badge| journey.unlock_badge(badge.id))
            .copied()
            .collect();

        let level_after = Level::for_points(journey.points());

        AwardOutcome {
            activity,
            points_earned,
            total_points: journey.points(),
            streak_length,
            streak_change,
            new_badges,
            level_up: (level_after > level_before).then_some(level_after),
        }
    }

    /// Awards an activity given by name.
    ///
    /// # Errors
    ///
    /// `UnknownActivity` for names outside the catalog; the journey is
    /// untouched.
    pub fn award_named(
        &self,
        journey: &mut UserJourney,
        activity: &str,
        now: Timestamp,
    ) -> Result<AwardOutcome, ValidationError> {
        let activity: ActivityType = activity.parse()?;
        Ok(self.award(journey, activity, now))
    }
}

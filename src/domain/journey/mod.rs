//! Journey module - the per-user longitudinal record.
//!
//! A `UserJourney` is created on a user's first interaction and mutated by
//! every successful one afterwards. It is pure data: the trend, selection
//! and gamification services in sibling modules hold the rules.
//!
//! # Invariants
//!
//! 1. Mood history never holds more than its capacity (at most 20)
//! 2. Points never decrease
//! 3. Badges are never removed
//! 4. Each recent-items window never exceeds the configured size

mod greeting;
mod journey;
mod metrics;
mod mood;
mod streak;

pub use greeting::greeting;
pub use journey::{display_name_for, JourneyLimits, UserJourney, MAX_HISTORY_CAPACITY};
pub use metrics::DomainMetrics;
pub use mood::{Assessment, MoodEntry, MoodLabel, MoodScore};
pub use streak::{Streak, StreakChange};

//! Gamification module - points, streaks, badges and levels.
//!
//! # Invariants
//!
//! 1. Points only increase, by the fixed value of the completed activity
//! 2. A streak counts calendar days, at most once per day per domain
//! 3. A badge unlocks at most once and is never revoked

mod badges;
mod engine;
mod level;

pub use badges::{badge_by_id, badges_for, Badge, BADGE_CATALOG};
pub use engine::{AwardOutcome, GamificationEngine};
pub use level::Level;

//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, errors, timestamps, bounded ring)
//! - `wellness` - Domains, activities and input payloads
//! - `journey` - Per-user journey aggregate, mood entries and streaks
//! - `trend` - Mood trend analysis and proactive interventions
//! - `selection` - Anti-repetition content selection
//! - `gamification` - Points, streak and badge awards

pub mod foundation;
pub mod gamification;
pub mod journey;
pub mod selection;
pub mod trend;
pub mod wellness;

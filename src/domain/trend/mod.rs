//! Trend & intervention module.
//!
//! Consumes mood signals, keeps the bounded mood history, classifies the
//! emotional trajectory and decides when to raise a proactive
//! intervention.

mod analysis;
mod engine;

pub use analysis::{analyze, Trend, TrendAnalysis, MIN_TREND_ENTRIES};
pub use engine::{
    CooldownPolicy, InterventionReason, InterventionSignal, MoodRecording, TrendEngine,
    TrendSettings,
};

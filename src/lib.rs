//! MindMate - stateful orchestration core of a conversational wellness assistant.
//!
//! Routes user input to one of seven wellness domains and keeps per-user
//! longitudinal state: bounded mood history with trend detection and
//! proactive interventions, anti-repetition content selection, and points,
//! streaks and badges.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

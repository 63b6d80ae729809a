//! Anti-repetition selection of served content.

mod anti_repetition;
mod catalog;

pub use anti_repetition::AntiRepetitionSelector;
pub use catalog::{ContentItem, ContentPool, DEFAULT_GAME_TYPES, STRESS_GAME_CATEGORY};

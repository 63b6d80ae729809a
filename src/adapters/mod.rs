//! Adapters - Implementations of port interfaces.
//!
//! - `state` - In-memory user state store
//! - `classifier` - Keyword intent classifier
//! - `handlers` - Domain handlers and test doubles

pub mod classifier;
pub mod handlers;
pub mod state;

pub use classifier::KeywordIntentClassifier;
pub use handlers::{CannedDomainHandler, KeywordMoodHandler, MockDomainHandler, MockIntentClassifier};
pub use state::InMemoryUserStateStore;

//! Domain handler adapters.
//!
//! - `KeywordMoodHandler` - Keyword-band mood scoring with coping advice
//! - `CannedDomainHandler` - Fixed replies per domain
//! - `MockDomainHandler` / `MockIntentClassifier` - Configurable test doubles

mod canned;
mod keyword_mood;
mod mock;

pub use canned::CannedDomainHandler;
pub use keyword_mood::{KeywordMoodHandler, MoodReading};
pub use mock::{MockDomainHandler, MockIntentClassifier};

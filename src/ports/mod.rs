//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `UserStateStore` - Per-user journey storage with atomic mutations
//! - `IntentClassifier` - Maps input to a wellness domain
//! - `DomainHandler` - Specialist agent producing a domain's reply

mod domain_handler;
mod intent_classifier;
mod user_state_store;

pub use domain_handler::{DispatchError, DomainHandler, DomainRequest, DomainResult, MoodSignal};
pub use intent_classifier::{Classification, IntentClassifier};
pub use user_state_store::{JourneyMutation, UserStateStore};

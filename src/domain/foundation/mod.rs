//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, bounded containers and error types
//! that form the vocabulary of the MindMate domain.

mod errors;
mod ids;
mod ring;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{RequestId, UserId};
pub use ring::BoundedRing;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;

//! User State Store Port - per-user journey persistence.
//!
//! The store owns every `UserJourney`. Callers never hold a live reference;
//! they read snapshots and submit mutations that are applied under the
//! user's lock.
//!
//! # Guarantees
//!
//! - Mutations for one user are linearizable; different users never block
//!   each other
//! - A mutation that returns `Err` leaves the journey unchanged
//! - Journeys are created on first touch with default limits; `mutate` on
//!   an unknown user creates it at the wall-clock time

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::journey::UserJourney;

/// A change applied to one journey while its owner's lock is held.
///
/// Returning `Err` discards everything the closure wrote.
pub type JourneyMutation<'a> =
    Box<dyn FnOnce(&mut UserJourney) -> Result<(), DomainError> + Send + 'a>;

/// Port for the in-process store of user journeys.
#[async_trait]
pub trait UserStateStore: Send + Sync {
    /// Returns a snapshot of the user's journey, creating it at `now` if
    /// absent.
    async fn get_or_create(&self, user_id: &UserId, now: Timestamp) -> UserJourney;

    /// Returns a snapshot if the user has a journey.
    async fn get(&self, user_id: &UserId) -> Option<UserJourney>;

    /// Applies `mutation` atomically and returns the committed journey.
    ///
    /// # Errors
    ///
    /// Whatever the mutation returns, or `InternalInvariantViolation` if the
    /// result breaks a journey invariant. The stored journey is untouched
    /// in both cases.
    async fn mutate<'a>(
        &self,
        user_id: &UserId,
        mutation: JourneyMutation<'a>,
    ) -> Result<UserJourney, DomainError>;

    /// Number of known users.
    async fn user_count(&self) -> usize;

    /// Snapshots of every journey, in no particular order.
    async fn journeys(&self) -> Vec<UserJourney>;
}

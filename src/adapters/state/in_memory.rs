//! In-memory user state store.
//!
//! One `tokio::sync::Mutex` per user serializes that user's mutations while
//! the outer `RwLock` is held only long enough to find or insert the slot.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::journey::{JourneyLimits, UserJourney};
use crate::ports::{JourneyMutation, UserStateStore};

type Slot = Arc<Mutex<UserJourney>>;

/// Process-local journey store.
#[derive(Debug, Default)]
pub struct InMemoryUserStateStore {
    limits: JourneyLimits,
    journeys: Arc<RwLock<HashMap<UserId, Slot>>>,
}

impl InMemoryUserStateStore {
    pub fn new(limits: JourneyLimits) -> Self {
        Self {
            limits,
            journeys: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn limits(&self) -> JourneyLimits {
        self.limits
    }

    async fn slot(&self, user_id: &UserId, now: Timestamp) -> Slot {
        if let Some(slot) = self.journeys.read().await.get(user_id) {
            return Arc::clone(slot);
        }

        let mut journeys = self.journeys.write().await;
        let slot = journeys.entry(user_id.clone()).or_insert_with(|| {
            tracing::debug!(user_id = %user_id, "creating journey");
            Arc::new(Mutex::new(UserJourney::new(
                user_id.clone(),
                self.limits,
                now,
            )))
        });
        Arc::clone(slot)
    }
}

#[async_trait]
impl UserStateStore for InMemoryUserStateStore {
    async fn get_or_create(&self, user_id: &UserId, now: Timestamp) -> UserJourney {
        let slot = self.slot(user_id, now).await;
        let journey = slot.lock().await;
        journey.clone()
    }

    async fn get(&self, user_id: &UserId) -> Option<UserJourney> {
        let slot = self.journeys.read().await.get(user_id).cloned()?;
        let journey = slot.lock().await;
        Some(journey.clone())
    }

    async fn mutate<'a>(
        &self,
        user_id: &UserId,
        mutation: JourneyMutation<'a>,
    ) -> Result<UserJourney, DomainError> {
        let slot = self.slot(user_id, Timestamp::now()).await;
        let mut current = slot.lock().await;

        // Work on a copy so a failed mutation leaves nothing behind.
        let mut draft = current.clone();
        mutation(&mut draft)?;
        if let Err(err) = draft.check_invariants() {
            tracing::error!(user_id = %user_id, error = %err, "journey invariant violated, discarding mutation");
            return Err(err);
        }

        *current = draft;
        Ok(current.clone())
    }

    async fn user_count(&self) -> usize {
        self.journeys.read().await.len()
    }

    async fn journeys(&self) -> Vec<UserJourney> {
        let slots: Vec<Slot> = self.journeys.read().await.values().cloned().collect();
        let mut out = Vec::with_capacity(slots.len());
        for slot in slots {
            out.push(slot.lock().await.clone());
        }
        out
    }
}

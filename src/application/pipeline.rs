//! Router pipeline stages.

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::{DomainError, StateMachine};

/// Stage of one request through the router.
///
/// `Idle → Classifying → Dispatching → Mutating → Responding → Idle`, with
/// shortcuts from `Classifying` and `Dispatching` straight to `Responding`
/// for unclear input and dispatch failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouterStage {
    Idle,
    Classifying,
    Dispatching,
    Mutating,
    Responding,
}

impl RouterStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouterStage::Idle => "idle",
            RouterStage::Classifying => "classifying",
            RouterStage::Dispatching => "dispatching",
            RouterStage::Mutating => "mutating",
            RouterStage::Responding => "responding",
        }
    }
}

impl fmt::Display for RouterStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StateMachine for RouterStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use RouterStage::*;
        matches!(
            (self, target),
            (Idle, Classifying)
                | (Classifying, Dispatching)
                | (Classifying, Responding)
                | (Dispatching, Mutating)
                | (Dispatching, Responding)
                | (Mutating, Responding)
                | (Responding, Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use RouterStage::*;
        match self {
            Idle => vec![Classifying],
            Classifying => vec![Dispatching, Responding],
            Dispatching => vec![Mutating, Responding],
            Mutating => vec![Responding],
            Responding => vec![Idle],
        }
    }
}

/// Tracks one request's stage and logs every transition.
#[derive(Debug)]
pub(crate) struct StageTracker<'a> {
    stage: RouterStage,
    request_id: &'a str,
}

impl<'a> StageTracker<'a> {
    pub(crate) fn new(request_id: &'a str) -> Self {
        Self {
            stage: RouterStage::Idle,
            request_id,
        }
    }

    pub(crate) fn stage(&self) -> RouterStage {
        self.stage
    }

    /// Moves to `next`. An illegal jump is a router bug.
    pub(crate) fn advance(&mut self, next: RouterStage) -> Result<(), DomainError> {
        let from = self.stage;
        self.stage = from
            .transition_to(next)
            .map_err(|err| DomainError::invariant(err.to_string()))?;
        tracing::debug!(request_id = self.request_id, from = %from, to = %next, "router stage");
        Ok(())
    }
}

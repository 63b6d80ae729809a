//! Intent Classifier Port - maps an input payload to a wellness domain.

use async_trait::async_trait;
use serde::Serialize;

use super::DispatchError;
use crate::domain::wellness::{InputPayload, WellnessDomain};

/// Port for intent classification.
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    async fn classify(&self, payload: &InputPayload) -> Result<Classification, DispatchError>;
}

/// Outcome of classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "domain")]
pub enum Classification {
    Domain(WellnessDomain),
    /// No domain matched; the user is asked to clarify.
    Unclear,
}

impl Classification {
    pub fn domain(&self) -> Option<WellnessDomain> {
        match self {
            Classification::Domain(domain) => Some(*domain),
            Classification::Unclear => None,
        }
    }
}

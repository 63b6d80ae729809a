//! Domain Handler Port - the specialist agents behind each wellness domain.
//!
//! Handlers turn an input payload into a reply. They never touch journey
//! state; the router applies all state changes after a handler succeeds.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::foundation::UserId;
use crate::domain::selection::ContentPool;
use crate::domain::wellness::{InputPayload, WellnessDomain};

/// Port implemented by each domain's specialist.
#[async_trait]
pub trait DomainHandler: Send + Sync {
    /// Produces a reply for the request.
    ///
    /// Must be safe to call concurrently for different users.
    async fn handle(&self, request: DomainRequest) -> Result<DomainResult, DispatchError>;
}

/// Input given to a domain handler.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainRequest {
    pub user_id: UserId,
    pub domain: WellnessDomain,
    pub payload: InputPayload,
}

impl DomainRequest {
    pub fn new(user_id: UserId, domain: WellnessDomain, payload: InputPayload) -> Self {
        Self {
            user_id,
            domain,
            payload,
        }
    }
}

/// Mood detected by the mood handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoodSignal {
    /// Raw score; the trend engine validates the 1..=10 range.
    pub score: i32,
    /// Number of emotional cues that contributed to the score.
    pub signal_count: u32,
    /// Self-reported stress level, when the user gave one.
    pub stress_level: Option<u8>,
}

/// A handler's reply.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DomainResult {
    /// Text shown to the user.
    pub content: String,
    /// Present when the handler assessed the user's mood.
    pub mood: Option<MoodSignal>,
    /// Candidate items for anti-repetition selection.
    pub offerings: Option<ContentPool>,
}

impl DomainResult {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_mood(mut self, score: i32, signal_count: u32) -> Self {
        self.mood = Some(MoodSignal {
            score,
            signal_count,
            stress_level: None,
        });
        self
    }

    /// Attaches a stress level to the mood signal; ignored without one.
    pub fn with_stress(mut self, level: u8) -> Self {
        if let Some(mood) = self.mood.as_mut() {
            mood.stress_level = Some(level);
        }
        self
    }

    pub fn with_offerings(mut self, pool: ContentPool) -> Self {
        self.offerings = Some(pool);
        self
    }
}

/// Errors from classification or a domain handler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// The collaborator did not answer in time.
    #[error("timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// The payload kind is not supported by this handler.
    #[error("unsupported input: {0}")]
    UnsupportedFormat(String),

    /// The collaborator answered with something unusable.
    #[error("malformed output: {0}")]
    MalformedOutput(String),

    /// Content generation failed.
    #[error("generation failed: {0}")]
    Generation(String),

    /// The collaborator is not reachable.
    #[error("handler unavailable: {0}")]
    Unavailable(String),
}

impl DispatchError {
    pub fn timeout(timeout_secs: u64) -> Self {
        DispatchError::Timeout { timeout_secs }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, DispatchError::Timeout { .. })
    }

    /// Apology shown in place of the handler's reply.
    pub fn user_message(&self) -> &'static str {
        match self {
            DispatchError::Timeout { .. } => {
                "Sorry, that took longer than expected. Please try again in a moment 💙"
            }
            DispatchError::UnsupportedFormat(_) => {
                "Sorry, I can't work with that kind of input yet. Could you describe it in text?"
            }
            DispatchError::MalformedOutput(_) | DispatchError::Generation(_) => {
                "Sorry, I had trouble putting a reply together. Could you try rephrasing?"
            }
            DispatchError::Unavailable(_) => {
                "Sorry, that part of MindMate is unavailable right now. Please try again later."
            }
        }
    }
}

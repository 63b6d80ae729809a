//! Keyword-based intent classifier.
//!
//! Counts keyword hits per domain over the words of a text payload. The
//! domain with the most hits wins; ties go to the domain listed first in
//! `WellnessDomain::ALL`, which puts mood ahead of everything else.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::wellness::{InputPayload, WellnessDomain};
use crate::ports::{Classification, DispatchError, IntentClassifier};

static KEYWORDS: Lazy<HashMap<&'static str, WellnessDomain>> = Lazy::new(|| {
    let tables: [(WellnessDomain, &[&str]); 7] = [
        (
            WellnessDomain::Mood,
            &[
                "feel", "feeling", "feelings", "mood", "sad", "anxious", "depressed", "lonely",
                "hopeless", "upset", "worried", "overwhelmed", "stressed", "happy", "panic",
                "emotional", "cry", "crying",
            ],
        ),
        (
            WellnessDomain::StressRelief,
            &[
                "stress", "game", "games", "play", "riddle", "trivia", "puzzle", "relax", "bored",
                "break", "fun", "distract", "distraction",
            ],
        ),
        (
            WellnessDomain::Communication,
            &[
                "email", "message", "reply", "respond", "conversation", "talk", "boss",
                "colleague", "coworker", "argument", "conflict", "tone", "apologize", "text",
            ],
        ),
        (
            WellnessDomain::MealPlanning,
            &[
                "meal", "meals", "recipe", "recipes", "cook", "cooking", "dinner", "lunch",
                "breakfast", "ingredients", "fridge", "groceries",
            ],
        ),
        (
            WellnessDomain::Tasks,
            &[
                "task", "tasks", "todo", "deadline", "deadlines", "schedule", "plan", "planning",
                "organize", "priorities", "prioritize", "procrastinating", "productive",
            ],
        ),
        (
            WellnessDomain::Nutrition,
            &[
                "nutrition", "calories", "protein", "diet", "vitamin", "vitamins", "healthy",
                "eat", "eating", "food", "carbs", "sugar",
            ],
        ),
        (
            WellnessDomain::ContentAnalysis,
            &[
                "summarize", "summary", "document", "article", "pdf", "analyze", "research",
                "paper", "report", "read",
            ],
        ),
    ];

    let mut map = HashMap::new();
    for (domain, words) in tables {
        for word in words {
            map.insert(*word, domain);
        }
    }
    map
});

/// Classifies by keyword hits; media payloads map by kind.
#[derive(Debug, Clone, Default)]
pub struct KeywordIntentClassifier;

impl KeywordIntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classifies a piece of text without going through the port.
    pub fn classify_text(text: &str) -> Classification {
        let lower = text.to_lowercase();
        let mut hits: HashMap<WellnessDomain, usize> = HashMap::new();
        for word in lower.split(|c: char| !c.is_alphanumeric()) {
            if let Some(domain) = KEYWORDS.get(word) {
                *hits.entry(*domain).or_default() += 1;
            }
        }

        let mut best: Option<(WellnessDomain, usize)> = None;
        for domain in WellnessDomain::ALL {
            let count = hits.get(&domain).copied().unwrap_or(0);
            if count > best.map_or(0, |(_, c)| c) {
                best = Some((domain, count));
            }
        }

        best.map_or(Classification::Unclear, |(domain, _)| {
            Classification::Domain(domain)
        })
    }
}

#[async_trait]
impl IntentClassifier for KeywordIntentClassifier {
    async fn classify(&self, payload: &InputPayload) -> Result<Classification, DispatchError> {
        let classification = match payload {
            InputPayload::Text(text) => Self::classify_text(text),
            InputPayload::Image(_) => Classification::Domain(WellnessDomain::MealPlanning),
            InputPayload::Audio(_) => Classification::Domain(WellnessDomain::Communication),
            InputPayload::Document(_) => Classification::Domain(WellnessDomain::ContentAnalysis),
        };
        tracing::trace!(kind = ?payload.kind(), ?classification, "keyword classification");
        Ok(classification)
    }
}

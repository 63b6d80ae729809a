//! Keyword-based mood handler.
//!
//! Scores a message from emotion keyword bands and answers with a coping
//! suggestion for the resulting assessment tier.

use async_trait::async_trait;

use crate::domain::journey::{Assessment, MoodScore};
use crate::ports::{DispatchError, DomainHandler, DomainRequest, DomainResult};

/// Score assigned when no band matches.
const NEUTRAL_SCORE: i32 = 5;

/// Stress level treated as no adjustment.
const BASELINE_STRESS: i32 = 5;

/// Bands are checked in order; the first band with a hit sets the score.
const EMOTION_BANDS: [(i32, &[&str]); 8] = [
    (2, &["depressed", "hopeless", "terrible", "suicidal", "can't go on"]),
    (3, &["anxious", "stressed", "worried", "overwhelmed", "panic"]),
    (4, &["sad", "down", "lonely", "upset", "disappointed"]),
    (5, &["okay", "meh", "alright", "so-so"]),
    (6, &["fine", "decent", "not bad"]),
    (7, &["good", "better", "nice", "pleased"]),
    (8, &["great", "happy", "amazing", "wonderful", "fantastic"]),
    (9, &["excellent", "thrilled", "ecstatic", "best"]),
];

/// Result of scoring one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodReading {
    pub score: i32,
    pub signal_count: u32,
    pub stress_level: Option<i32>,
}

/// Mood handler driven by keyword bands.
#[derive(Debug, Clone, Default)]
pub struct KeywordMoodHandler;

impl KeywordMoodHandler {
    pub fn new() -> Self {
        Self
    }

    /// Scores a message.
    ///
    /// A self-reported stress level such as "stress 8" or "stress level: 8"
    /// shifts the score by `(stress - 5) / 2`, rounded down, and the result
    /// is clamped to 1..=10.
    pub fn read(text: &str) -> MoodReading {
        let lower = text.to_lowercase();

        let base = EMOTION_BANDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
            .map_or(NEUTRAL_SCORE, |(score, _)| *score);

        let signal_count = EMOTION_BANDS
            .iter()
            .flat_map(|(_, words)| words.iter())
            .filter(|w| lower.contains(*w))
            .count() as u32;

        let stress_level = stress_level(&lower);
        let score = match stress_level {
            Some(stress) => (base - (stress - BASELINE_STRESS).div_euclid(2)).clamp(1, 10),
            None => base,
        };

        MoodReading {
            score,
            signal_count,
            stress_level,
        }
    }

    fn coping(assessment: Assessment) -> &'static str {
        match assessment {
            Assessment::NeedsImmediateSupport => {
                "💙 I hear you're going through a really tough time. Please remember you're not alone. \
                 Consider reaching out to a mental health professional or crisis line. \
                 Would you like some grounding exercises?"
            }
            Assessment::NeedsSupport => {
                "💙 Try this: 4-7-8 breathing. Inhale 4 seconds, hold 7, exhale 8. Repeat 4 times. \
                 Would you like a stress relief game?"
            }
            Assessment::Stable => {
                "You're managing okay. A short walk or talking to someone you trust might help lift your mood."
            }
            Assessment::Thriving => {
                "Wonderful! Keep doing what's working for you. Gratitude journaling can help maintain this positive state."
            }
        }
    }
}

/// Finds "stress <n>" with an optional "level" and ':' or '=' in between.
fn stress_level(lower: &str) -> Option<i32> {
    lower.match_indices("stress").find_map(|(idx, word)| {
        let rest = &lower[idx + word.len()..];
        if rest.starts_with(|c: char| c.is_alphabetic()) {
            return None;
        }
        let rest = rest.trim_start();
        let rest = rest.strip_prefix("level").unwrap_or(rest);
        let rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == ':' || c == '=');
        let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
        digits
            .parse::<i32>()
            .ok()
            .filter(|level| (1..=10).contains(level))
    })
}

#[async_trait]
impl DomainHandler for KeywordMoodHandler {
    async fn handle(&self, request: DomainRequest) -> Result<DomainResult, DispatchError> {
        let text = request.payload.as_text().ok_or_else(|| {
            DispatchError::UnsupportedFormat(format!("{:?} without text", request.payload.kind()))
        })?;

        let reading = Self::read(text);
        let score = MoodScore::clamped(reading.score);
        let content = format!(
            "I'm sensing you feel {} ({}/10). {}",
            score.label().as_str().replace('_', " "),
            score.value(),
            Self::coping(score.assessment())
        );

        tracing::debug!(
            user_id = %request.user_id,
            score = reading.score,
            signals = reading.signal_count,
            stress = ?reading.stress_level,
            "mood scored"
        );

        let result = DomainResult::text(content).with_mood(reading.score, reading.signal_count);
        Ok(match reading.stress_level.and_then(|level| u8::try_from(level).ok()) {
            Some(level) => result.with_stress(level),
            None => result,
        })
    }
}

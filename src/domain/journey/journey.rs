//! UserJourney aggregate.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use super::{DomainMetrics, MoodEntry, Streak, StreakChange};
use crate::domain::foundation::{BoundedRing, DomainError, Timestamp, UserId};
use crate::domain::wellness::WellnessDomain;

/// Hard upper bound on the mood history window.
pub const MAX_HISTORY_CAPACITY: usize = 20;

/// Capacities applied when a journey is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JourneyLimits {
    /// Mood history capacity, clamped to `MAX_HISTORY_CAPACITY`.
    pub history_capacity: usize,
    /// Size of each per-category anti-repetition window.
    pub repetition_window: usize,
}

impl Default for JourneyLimits {
    fn default() -> Self {
        Self {
            history_capacity: MAX_HISTORY_CAPACITY,
            repetition_window: 10,
        }
    }
}

/// One user's longitudinal wellness record.
///
/// Ordered maps keep serialization deterministic, so two journeys with the
/// same content serialize to the same bytes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserJourney {
    user_id: UserId,
    display_name: String,
    created_at: Timestamp,
    last_active_at: Option<Timestamp>,
    mood_history: BoundedRing<MoodEntry>,
    stress_history: BoundedRing<u8>,
    streaks: BTreeMap<WellnessDomain, Streak>,
    badges: BTreeSet<String>,
    points: u64,
    activity_counts: BTreeMap<WellnessDomain, u64>,
    recent_items: BTreeMap<String, BoundedRing<String>>,
    repetition_window: usize,
    metrics: BTreeMap<WellnessDomain, DomainMetrics>,
    last_intervention_at: Option<Timestamp>,
}

impl UserJourney {
    /// Creates an empty journey.
    pub fn new(user_id: UserId, limits: JourneyLimits, now: Timestamp) -> Self {
        let display_name = display_name_for(&user_id);
        let history_capacity = limits.history_capacity.min(MAX_HISTORY_CAPACITY);
        Self {
            user_id,
            display_name,
            created_at: now,
            last_active_at: None,
            mood_history: BoundedRing::with_capacity(history_capacity),
            stress_history: BoundedRing::with_capacity(history_capacity),
            streaks: BTreeMap::new(),
            badges: BTreeSet::new(),
            points: 0,
            activity_counts: BTreeMap::new(),
            recent_items: BTreeMap::new(),
            repetition_window: limits.repetition_window,
            metrics: BTreeMap::new(),
            last_intervention_at: None,
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Accessors
    // ════════════════════════════════════════════════════════════════════════════

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Last successful interaction, `None` before the first one.
    pub fn last_active_at(&self) -> Option<Timestamp> {
        self.last_active_at
    }

    pub fn mood_history(&self) -> &BoundedRing<MoodEntry> {
        &self.mood_history
    }

    /// Self-reported stress levels, oldest first.
    pub fn stress_history(&self) -> &BoundedRing<u8> {
        &self.stress_history
    }

    pub fn streak(&self, domain: WellnessDomain) -> Option<&Streak> {
        self.streaks.get(&domain)
    }

    pub fn streaks(&self) -> &BTreeMap<WellnessDomain, Streak> {
        &self.streaks
    }

    pub fn badges(&self) -> &BTreeSet<String> {
        &self.badges
    }

    pub fn has_badge(&self, badge_id: &str) -> bool {
        self.badges.contains(badge_id)
    }

    pub fn points(&self) -> u64 {
        self.points
    }

    /// Completed activities in a domain (games played, documents analyzed, ...).
    pub fn activity_count(&self, domain: WellnessDomain) -> u64 {
        self.activity_counts.get(&domain).copied().unwrap_or(0)
    }

    /// Recently served item ids for a category, oldest first.
    pub fn recent_items(&self, category: &str) -> Vec<String> {
        self.recent_items
            .get(category)
            .map(BoundedRing::to_vec)
            .unwrap_or_default()
    }

    pub fn repetition_window(&self) -> usize {
        self.repetition_window
    }

    pub fn metrics(&self) -> &BTreeMap<WellnessDomain, DomainMetrics> {
        &self.metrics
    }

    pub fn last_intervention_at(&self) -> Option<Timestamp> {
        self.last_intervention_at
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Mutations (used by the domain services)
    // ════════════════════════════════════════════════════════════════════════════

    /// Appends a mood entry, returning the evicted oldest entry if full.
    pub fn push_mood(&mut self, entry: MoodEntry) -> Option<MoodEntry> {
        self.mood_history.push(entry)
    }

    /// Appends a stress level, returning the evicted oldest level if full.
    pub fn push_stress(&mut self, level: u8) -> Option<u8> {
        self.stress_history.push(level)
    }

    pub fn add_points(&mut self, points: u64) {
        self.points = self.points.saturating_add(points);
    }

    /// Records activity on `now`'s calendar day in the domain's streak.
    pub fn record_streak(&mut self, domain: WellnessDomain, now: Timestamp) -> (u32, StreakChange) {
        let today = now.date();
        match self.streaks.get_mut(&domain) {
            Some(streak) => {
                let change = streak.record(today);
                (streak.length(), change)
            }
            None => {
                let streak = Streak::start(today);
                self.streaks.insert(domain, streak);
                (streak.length(), StreakChange::Started)
            }
        }
    }

    /// Increments and returns the domain's activity counter.
    pub fn increment_activity(&mut self, domain: WellnessDomain) -> u64 {
        let count = self.activity_counts.entry(domain).or_insert(0);
        *count += 1;
        *count
    }

    /// Unlocks a badge. Returns false if it was already unlocked.
    pub fn unlock_badge(&mut self, badge_id: impl Into<String>) -> bool {
        self.badges.insert(badge_id.into())
    }

    /// Remembers a served item in the category's window.
    pub fn remember_item(&mut self, category: &str, item_id: impl Into<String>) {
        let window = self.repetition_window;
        self.recent_items
            .entry(category.to_string())
            .or_insert_with(|| BoundedRing::with_capacity(window))
            .push(item_id.into());
    }

    /// Records a successful domain completion in the per-user metrics.
    pub fn record_latency(&mut self, domain: WellnessDomain, latency: Duration) {
        self.metrics.entry(domain).or_default().record(latency);
    }

    pub fn mark_intervention(&mut self, at: Timestamp) {
        self.last_intervention_at = Some(at);
    }

    pub fn touch(&mut self, now: Timestamp) {
        self.last_active_at = Some(now);
    }

    /// Verifies the structural invariants.
    ///
    /// These hold by construction; a failure here means a bug and is
    /// reported as an internal invariant violation.
    pub fn check_invariants(&self) -> Result<(), DomainError> {
        if self.mood_history.len() > MAX_HISTORY_CAPACITY {
            return Err(DomainError::invariant(format!(
                "mood history holds {} entries (max {})",
                self.mood_history.len(),
                MAX_HISTORY_CAPACITY
            )));
        }
        if self.stress_history.len() > MAX_HISTORY_CAPACITY {
            return Err(DomainError::invariant(format!(
                "stress history holds {} entries (max {})",
                self.stress_history.len(),
                MAX_HISTORY_CAPACITY
            )));
        }
        for (category, ring) in &self.recent_items {
            if ring.len() > self.repetition_window {
                return Err(DomainError::invariant(format!(
                    "recent items for '{}' hold {} entries (window {})",
                    category,
                    ring.len(),
                    self.repetition_window
                ))
                .with_detail("category", category.clone()));
            }
        }
        Ok(())
    }
}

/// Friendly name derived from a user id.
///
/// Uses the text before the first underscore, title-cased, so `sarah_42`
/// becomes `Sarah`. Ids without an underscore are title-cased whole.
pub fn display_name_for(user_id: &UserId) -> String {
    let raw = user_id.as_str();
    let base = match raw.split_once('_') {
        Some((head, _)) if !head.is_empty() => head,
        _ => raw,
    };
    title_case(base)
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::journey::MoodScore;

    fn journey(id: &str) -> UserJourney {
        UserJourney::new(UserId::new(id).unwrap(), JourneyLimits::default(), Timestamp::now())
    }

    #[test]
    fn new_journey_is_empty() {
        let journey = journey("alex");
        assert_eq!(journey.points(), 0);
        assert!(journey.badges().is_empty());
        assert!(journey.mood_history().is_empty());
        assert_eq!(journey.mood_history().capacity(), MAX_HISTORY_CAPACITY);
        assert_eq!(journey.last_active_at(), None);
        assert_eq!(journey.last_intervention_at(), None);
    }

    #[test]
    fn history_capacity_is_clamped() {
        let limits = JourneyLimits {
            history_capacity: 50,
            repetition_window: 3,
        };
        let journey = UserJourney::new(UserId::new("a").unwrap(), limits, Timestamp::now());
        assert_eq!(journey.mood_history().capacity(), MAX_HISTORY_CAPACITY);
    }

    #[test]
    fn display_name_uses_prefix_before_underscore() {
        assert_eq!(journey("sarah_42").display_name(), "Sarah");
        assert_eq!(journey("alex").display_name(), "Alex");
        assert_eq!(journey("mary jane").display_name(), "Mary Jane");
        assert_eq!(journey("_hidden").display_name(), "_Hidden");
    }

    #[test]
    fn unlock_badge_is_idempotent() {
        let mut journey = journey("alex");
        assert!(journey.unlock_badge("game_starter"));
        assert!(!journey.unlock_badge("game_starter"));
        assert_eq!(journey.badges().len(), 1);
    }

    #[test]
    fn remember_item_respects_window() {
        let limits = JourneyLimits {
            history_capacity: 20,
            repetition_window: 2,
        };
        let mut journey = UserJourney::new(UserId::new("a").unwrap(), limits, Timestamp::now());
        for item in ["riddle", "trivia", "pattern"] {
            journey.remember_item("stress_game", item);
        }
        assert_eq!(journey.recent_items("stress_game"), vec!["trivia", "pattern"]);
        assert!(journey.recent_items("unknown").is_empty());
        assert!(journey.check_invariants().is_ok());
    }

    #[test]
    fn push_mood_evicts_after_capacity() {
        let mut journey = journey("alex");
        let now = Timestamp::now();
        for i in 0..21 {
            let score = MoodScore::clamped(i % 10 + 1);
            let evicted = journey.push_mood(MoodEntry::new(now, score, 0));
            assert_eq!(evicted.is_some(), i == 20);
        }
        assert_eq!(journey.mood_history().len(), 20);
    }

    #[test]
    fn push_stress_keeps_last_twenty() {
        let mut journey = journey("alex");
        for i in 0..21u8 {
            let evicted = journey.push_stress(i % 10 + 1);
            assert_eq!(evicted, (i == 20).then_some(1));
        }
        let kept = journey.stress_history().to_vec();
        assert_eq!(kept.len(), 20);
        assert_eq!(kept.first(), Some(&2));
        assert_eq!(kept.last(), Some(&1));
        assert!(journey.check_invariants().is_ok());
    }

    #[test]
    fn add_points_never_decreases() {
        let mut journey = journey("alex");
        journey.add_points(u64::MAX);
        journey.add_points(5);
        assert_eq!(journey.points(), u64::MAX);
    }
}

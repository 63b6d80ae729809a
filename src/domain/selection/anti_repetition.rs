//! Uniform selection that avoids recently served items.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use crate::domain::foundation::ValidationError;
use crate::domain::journey::UserJourney;

/// Picks the next item from a pool, skipping the last `W` served items of
/// the same category.
///
/// `W` is the journey's repetition window, capped at `pool size - 1` so at
/// least one candidate always stays eligible.
#[derive(Debug)]
pub struct AntiRepetitionSelector {
    rng: Mutex<StdRng>,
}

impl Default for AntiRepetitionSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl AntiRepetitionSelector {
    /// Creates a selector seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Creates a deterministic selector.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Selects an item and records it in the category's recent window.
    ///
    /// Duplicate ids in `pool` count once. A single-member pool always
    /// returns that member.
    ///
    /// # Errors
    ///
    /// `EmptyPool` if `pool` has no elements; the journey is untouched.
    pub fn next_item<S: AsRef<str>>(
        &self,
        journey: &mut UserJourney,
        category: &str,
        pool: &[S],
    ) -> Result<String, ValidationError> {
        let candidates = unique(pool);
        if candidates.is_empty() {
            return Err(ValidationError::empty_pool(category));
        }

        let excluded_count = journey.repetition_window().min(candidates.len() - 1);
        let recent = journey.recent_items(category);
        let excluded: HashSet<&str> = recent
            .iter()
            .rev()
            .take(excluded_count)
            .map(String::as_str)
            .collect();

        let eligible: Vec<&str> = candidates
            .iter()
            .copied()
            .filter(|id| !excluded.contains(id))
            .collect();

        let chosen = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            // `eligible` is non-empty: at most `candidates - 1` ids are excluded.
            eligible
                .choose(&mut *rng)
                .or_else(|| candidates.choose(&mut *rng))
                .copied()
                .ok_or_else(|| ValidationError::empty_pool(category))?
                .to_string()
        };

        journey.remember_item(category, chosen.clone());
        Ok(chosen)
    }
}

fn unique<S: AsRef<str>>(pool: &[S]) -> Vec<&str> {
    let mut seen = HashSet::new();
    pool.iter()
        .map(AsRef::as_ref)
        .filter(|id| seen.insert(*id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Timestamp, UserId};
    use crate::domain::journey::JourneyLimits;
    use proptest::prelude::*;
    use std::collections::VecDeque;

    fn journey(window: usize) -> UserJourney {
        UserJourney::new(
            UserId::new("player").unwrap(),
            JourneyLimits {
                history_capacity: 20,
                repetition_window: window,
            },
            Timestamp::now(),
        )
    }

    fn pool(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("item-{}", i)).collect()
    }

    #[test]
    fn empty_pool_is_rejected() {
        let selector = AntiRepetitionSelector::seeded(1);
        let mut journey = journey(10);
        let before = journey.clone();
        let empty: Vec<String> = Vec::new();

        let err = selector.next_item(&mut journey, "games", &empty).unwrap_err();

        assert_eq!(err, ValidationError::empty_pool("games"));
        assert_eq!(journey, before);
    }

    #[test]
    fn single_item_pool_repeats_without_error() {
        let selector = AntiRepetitionSelector::seeded(2);
        let mut journey = journey(10);
        for _ in 0..5 {
            assert_eq!(selector.next_item(&mut journey, "games", &["only"]).unwrap(), "only");
        }
    }

    #[test]
    fn selection_is_recorded_in_category_window() {
        let selector = AntiRepetitionSelector::seeded(3);
        let mut journey = journey(3);
        let picked = selector.next_item(&mut journey, "games", &pool(5)).unwrap();
        assert_eq!(journey.recent_items("games"), vec![picked]);
        assert!(journey.recent_items("recipes").is_empty());
    }

    #[test]
    fn window_capped_at_pool_size_minus_one_alternates() {
        // pool of 2 with window 10: exclusion is capped at 1, so picks alternate
        let selector = AntiRepetitionSelector::seeded(4);
        let mut journey = journey(10);
        let items = pool(2);
        let mut previous = selector.next_item(&mut journey, "games", &items).unwrap();
        for _ in 0..20 {
            let next = selector.next_item(&mut journey, "games", &items).unwrap();
            assert_ne!(next, previous);
            previous = next;
        }
    }

    #[test]
    fn duplicate_pool_entries_count_once() {
        let selector = AntiRepetitionSelector::seeded(5);
        let mut journey = journey(10);
        let items = ["a", "a", "b"];
        let first = selector.next_item(&mut journey, "x", &items).unwrap();
        let second = selector.next_item(&mut journey, "x", &items).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn no_repeat_within_window_over_many_draws() {
        let selector = AntiRepetitionSelector::seeded(6);
        let window = 10;
        let mut journey = journey(window);
        let items = pool(15);
        let mut last_served: VecDeque<String> = VecDeque::new();

        for _ in 0..1_000 {
            let picked = selector.next_item(&mut journey, "games", &items).unwrap();
            assert!(!last_served.contains(&picked), "{} repeated within window", picked);
            last_served.push_back(picked);
            if last_served.len() > window {
                last_served.pop_front();
            }
        }
    }

    #[test]
    fn all_eligible_items_are_reachable() {
        let selector = AntiRepetitionSelector::seeded(7);
        let mut journey = journey(1);
        let items = pool(4);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.insert(selector.next_item(&mut journey, "games", &items).unwrap());
        }
        assert_eq!(seen.len(), 4);
    }

    proptest! {
        #[test]
        fn window_holds_for_any_pool_and_window(n in 2usize..12, w in 0usize..12, seed in any::<u64>()) {
            let selector = AntiRepetitionSelector::seeded(seed);
            let mut journey = journey(w);
            let items = pool(n);
            let effective = w.min(n - 1);
            let mut served: Vec<String> = Vec::new();
            for _ in 0..60 {
                let picked = selector.next_item(&mut journey, "games", &items).unwrap();
                let start = served.len().saturating_sub(effective);
                prop_assert!(!served[start..].contains(&picked));
                served.push(picked);
                prop_assert!(journey.recent_items("games").len() <= w);
            }
        }
    }
}

//! Badge catalog.

use serde::Serialize;

use crate::domain::wellness::WellnessDomain;

/// A badge unlocked when a domain's activity counter reaches a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Badge {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub domain: WellnessDomain,
    pub threshold: u64,
}

impl Badge {
    /// Name with its emoji, as shown to users.
    pub fn display(&self) -> String {
        format!("{} {}", self.emoji, self.name)
    }
}

pub static BADGE_CATALOG: &[Badge] = &[
    Badge {
        id: "game_starter",
        name: "Game Starter",
        emoji: "🎮",
        domain: WellnessDomain::StressRelief,
        threshold: 5,
    },
    Badge {
        id: "game_master",
        name: "Game Master",
        emoji: "🎮🎮",
        domain: WellnessDomain::StressRelief,
        threshold: 20,
    },
    Badge {
        id: "game_legend",
        name: "Game Legend",
        emoji: "🎮🎮🎮",
        domain: WellnessDomain::StressRelief,
        threshold: 50,
    },
    Badge {
        id: "knowledge_seeker",
        name: "Knowledge Seeker",
        emoji: "📚",
        domain: WellnessDomain::ContentAnalysis,
        threshold: 5,
    },
    Badge {
        id: "research_master",
        name: "Research Master",
        emoji: "📚📚",
        domain: WellnessDomain::ContentAnalysis,
        threshold: 20,
    },
    Badge {
        id: "self_aware",
        name: "Self Aware",
        emoji: "💙",
        domain: WellnessDomain::Mood,
        threshold: 10,
    },
    Badge {
        id: "clear_communicator",
        name: "Clear Communicator",
        emoji: "💬",
        domain: WellnessDomain::Communication,
        threshold: 5,
    },
    Badge {
        id: "task_tamer",
        name: "Task Tamer",
        emoji: "✅",
        domain: WellnessDomain::Tasks,
        threshold: 10,
    },
    Badge {
        id: "home_chef",
        name: "Home Chef",
        emoji: "🍳",
        domain: WellnessDomain::MealPlanning,
        threshold: 5,
    },
    Badge {
        id: "nutrition_novice",
        name: "Nutrition Novice",
        emoji: "🥗",
        domain: WellnessDomain::Nutrition,
        threshold: 5,
    },
];

/// Badges earned through activity in `domain`, lowest threshold first.
pub fn badges_for(domain: WellnessDomain) -> impl Iterator<Item = &'static Badge> {
    BADGE_CATALOG.iter().filter(move |badge| badge.domain == domain)
}

pub fn badge_by_id(id: &str) -> Option<&'static Badge> {
    BADGE_CATALOG.iter().find(|badge| badge.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn badge_ids_are_unique() {
        let ids: HashSet<_> = BADGE_CATALOG.iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), BADGE_CATALOG.len());
    }

    #[test]
    fn every_domain_has_a_badge() {
        for domain in WellnessDomain::ALL {
            assert!(badges_for(domain).next().is_some(), "{} has no badge", domain);
        }
    }

    #[test]
    fn game_badges_ascend() {
        let thresholds: Vec<u64> = badges_for(WellnessDomain::StressRelief)
            .map(|b| b.threshold)
            .collect();
        assert_eq!(thresholds, vec![5, 20, 50]);
    }

    #[test]
    fn display_includes_emoji() {
        assert_eq!(badge_by_id("game_starter").unwrap().display(), "🎮 Game Starter");
        assert!(badge_by_id("nope").is_none());
    }
}

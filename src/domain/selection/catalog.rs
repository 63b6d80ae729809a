//! Content pools offered for selection.

use serde::{Deserialize, Serialize};

/// Category under which stress-relief games are tracked.
pub const STRESS_GAME_CATEGORY: &str = "stress_game";

/// Game categories served when the stress-relief handler offers none.
pub const DEFAULT_GAME_TYPES: [&str; 5] = ["riddle", "trivia", "brain_teaser", "pattern", "detective"];

/// A servable piece of content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub body: String,
}

impl ContentItem {
    pub fn new(id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            body: body.into(),
        }
    }
}

/// Candidates for one content category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPool {
    pub category: String,
    pub items: Vec<ContentItem>,
}

impl ContentPool {
    pub fn new(category: impl Into<String>, items: Vec<ContentItem>) -> Self {
        Self {
            category: category.into(),
            items,
        }
    }

    /// The default stress-game pool, one item per game type.
    pub fn default_games() -> Self {
        let items = DEFAULT_GAME_TYPES
            .iter()
            .map(|kind| ContentItem::new(*kind, format!("Let's play a quick {} game!", kind.replace('_', " "))))
            .collect();
        Self::new(STRESS_GAME_CATEGORY, items)
    }

    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.id.as_str()).collect()
    }

    pub fn find(&self, id: &str) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

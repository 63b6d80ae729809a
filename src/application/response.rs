//! Router replies.

use serde::Serialize;

use crate::domain::foundation::{RequestId, UserId};
use crate::domain::gamification::{Badge, Level};
use crate::domain::selection::ContentItem;
use crate::domain::trend::{InterventionReason, Trend};
use crate::domain::wellness::WellnessDomain;

/// How a request was served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    /// The domain handler answered and state was updated.
    Served,
    /// The handler failed; the reply is an apology and nothing changed.
    Degraded,
    /// No domain matched the input.
    NeedsClarification,
}

/// Proactive stress-relief suggestion attached to a mood reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterventionNote {
    pub reason: InterventionReason,
    /// Stress-relief handler reply, absent if that call failed.
    pub content: Option<String>,
    pub selected_item: Option<ContentItem>,
}

/// Everything the router produced for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub request_id: RequestId,
    pub user_id: UserId,
    pub domain: Option<WellnessDomain>,
    pub status: ResponseStatus,
    pub greeting: String,
    pub content: String,
    pub points_earned: u64,
    pub total_points: u64,
    pub streak: Option<u32>,
    pub badges_unlocked: Vec<Badge>,
    pub level_up: Option<Level>,
    pub trend: Option<Trend>,
    pub selected_item: Option<ContentItem>,
    pub intervention: Option<InterventionNote>,
}

impl Response {
    pub(crate) fn new(
        request_id: RequestId,
        user_id: UserId,
        status: ResponseStatus,
        greeting: String,
        content: String,
    ) -> Self {
        Self {
            request_id,
            user_id,
            domain: None,
            status,
            greeting,
            content,
            points_earned: 0,
            total_points: 0,
            streak: None,
            badges_unlocked: Vec::new(),
            level_up: None,
            trend: None,
            selected_item: None,
            intervention: None,
        }
    }

    pub fn is_served(&self) -> bool {
        self.status == ResponseStatus::Served
    }

    /// Assembles the user-facing reply text.
    pub fn render(&self) -> String {
        let mut parts = vec![self.greeting.clone(), self.content.clone()];

        if let Some(item) = &self.selected_item {
            parts.push(item.body.clone());
        }

        if let Some(note) = &self.intervention {
            let mut text = String::from(
                "💙 I noticed things have been feeling heavy lately. How about a short break together?",
            );
            if let Some(content) = &note.content {
                text.push(' ');
                text.push_str(content);
            }
            if let Some(item) = &note.selected_item {
                text.push(' ');
                text.push_str(&item.body);
            }
            parts.push(text);
        }

        for badge in &self.badges_unlocked {
            parts.push(format!("🏆 New badge unlocked: {}", badge.display()));
        }

        if let Some(level) = self.level_up {
            parts.push(format!("⭐ You reached {}!", level));
        }

        if self.points_earned > 0 {
            let mut line = format!("+{} points (total {})", self.points_earned, self.total_points);
            if let Some(streak) = self.streak.filter(|days| *days > 1) {
                line.push_str(&format!(" · 🔥 {}-day streak", streak));
            }
            parts.push(line);
        }

        parts.retain(|part| !part.is_empty());
        parts.join("\n\n")
    }
}

//! Fixed-reply handlers for the domains without a real specialist wired in.

use async_trait::async_trait;

use crate::domain::selection::ContentPool;
use crate::domain::wellness::WellnessDomain;
use crate::ports::{DispatchError, DomainHandler, DomainRequest, DomainResult};

/// Answers every request with the same short reply for its domain.
///
/// The stress-relief variant also offers the default game pool so the
/// router can pick a game.
#[derive(Debug, Clone, Copy)]
pub struct CannedDomainHandler {
    domain: WellnessDomain,
}

impl CannedDomainHandler {
    pub fn new(domain: WellnessDomain) -> Self {
        Self { domain }
    }

    fn reply(&self) -> &'static str {
        match self.domain {
            WellnessDomain::Mood => "Thanks for checking in. How are you feeling right now?",
            WellnessDomain::StressRelief => "Let's take a short break together 🎮",
            WellnessDomain::Communication => {
                "Try opening with what you appreciate, then state one clear request."
            }
            WellnessDomain::MealPlanning => {
                "A simple plan: a grain, a protein and two vegetables. Want a recipe?"
            }
            WellnessDomain::Tasks => {
                "Pick the one task that matters most today and give it 25 focused minutes."
            }
            WellnessDomain::Nutrition => {
                "Aim for a colourful plate and a glass of water with every meal."
            }
            WellnessDomain::ContentAnalysis => "Share the text and I'll pull out the key points.",
        }
    }
}

#[async_trait]
impl DomainHandler for CannedDomainHandler {
    async fn handle(&self, request: DomainRequest) -> Result<DomainResult, DispatchError> {
        if request.domain != self.domain {
            return Err(DispatchError::Unavailable(format!(
                "{} handler received a {} request",
                self.domain, request.domain
            )));
        }

        let result = DomainResult::text(self.reply());
        Ok(match self.domain {
            WellnessDomain::StressRelief => result.with_offerings(ContentPool::default_games()),
            _ => result,
        })
    }
}

//! The seven domain handlers the router dispatches to.

use std::sync::Arc;

use crate::domain::wellness::WellnessDomain;
use crate::ports::DomainHandler;

/// One handler per wellness domain.
#[derive(Clone)]
pub struct DomainHandlers {
    pub mood: Arc<dyn DomainHandler>,
    pub stress_relief: Arc<dyn DomainHandler>,
    pub communication: Arc<dyn DomainHandler>,
    pub meal_planning: Arc<dyn DomainHandler>,
    pub tasks: Arc<dyn DomainHandler>,
    pub nutrition: Arc<dyn DomainHandler>,
    pub content_analysis: Arc<dyn DomainHandler>,
}

impl DomainHandlers {
    /// Uses the same handler for every domain.
    pub fn uniform(handler: Arc<dyn DomainHandler>) -> Self {
        Self {
            mood: Arc::clone(&handler),
            stress_relief: Arc::clone(&handler),
            communication: Arc::clone(&handler),
            meal_planning: Arc::clone(&handler),
            tasks: Arc::clone(&handler),
            nutrition: Arc::clone(&handler),
            content_analysis: handler,
        }
    }

    /// Builds the set from a per-domain factory.
    pub fn from_fn(mut make: impl FnMut(WellnessDomain) -> Arc<dyn DomainHandler>) -> Self {
        Self {
            mood: make(WellnessDomain::Mood),
            stress_relief: make(WellnessDomain::StressRelief),
            communication: make(WellnessDomain::Communication),
            meal_planning: make(WellnessDomain::MealPlanning),
            tasks: make(WellnessDomain::Tasks),
            nutrition: make(WellnessDomain::Nutrition),
            content_analysis: make(WellnessDomain::ContentAnalysis),
        }
    }

    /// Replaces one domain's handler.
    pub fn with(mut self, domain: WellnessDomain, handler: Arc<dyn DomainHandler>) -> Self {
        *self.slot_mut(domain) = handler;
        self
    }

    pub fn for_domain(&self, domain: WellnessDomain) -> &Arc<dyn DomainHandler> {
        match domain {
            WellnessDomain::Mood => &self.mood,
            WellnessDomain::StressRelief => &self.stress_relief,
            WellnessDomain::Communication => &self.communication,
            WellnessDomain::MealPlanning => &self.meal_planning,
            WellnessDomain::Tasks => &self.tasks,
            WellnessDomain::Nutrition => &self.nutrition,
            WellnessDomain::ContentAnalysis => &self.content_analysis,
        }
    }

    fn slot_mut(&mut self, domain: WellnessDomain) -> &mut Arc<dyn DomainHandler> {
        match domain {
            WellnessDomain::Mood => &mut self.mood,
            WellnessDomain::StressRelief => &mut self.stress_relief,
            WellnessDomain::Communication => &mut self.communication,
            WellnessDomain::MealPlanning => &mut self.meal_planning,
            WellnessDomain::Tasks => &mut self.tasks,
            WellnessDomain::Nutrition => &mut self.nutrition,
            WellnessDomain::ContentAnalysis => &mut self.content_analysis,
        }
    }
}

impl std::fmt::Debug for DomainHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainHandlers").finish_non_exhaustive()
    }
}

//! OrchestrationRouter - the single entry point for user requests.
//!
//! Classifies the input, dispatches it to the domain's handler, applies the
//! trend, selection and gamification effects in one atomic journey mutation,
//! records observability and assembles the reply.

use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::timeout;

use super::domain_handlers::DomainHandlers;
use super::observability::{MetricsSnapshot, ObservabilityCollector};
use super::pipeline::{RouterStage, StageTracker};
use super::response::{InterventionNote, Response, ResponseStatus};
use super::stats::UserStats;
use crate::domain::foundation::{DomainError, RequestId, Timestamp, UserId};
use crate::domain::gamification::{AwardOutcome, GamificationEngine};
use crate::domain::journey::{greeting, UserJourney};
use crate::domain::selection::{AntiRepetitionSelector, ContentItem, ContentPool};
use crate::domain::trend::{InterventionSignal, MoodRecording, TrendEngine};
use crate::domain::wellness::{ActivityType, InputPayload, WellnessDomain};
use crate::ports::{
    Classification, DispatchError, DomainHandler, DomainRequest, DomainResult, IntentClassifier,
    UserStateStore,
};

/// Observability key for intent classification.
pub const CLASSIFIER_METRIC: &str = "classifier";

/// Observability key for requests no domain matched.
pub const UNCLEAR_METRIC: &str = "unclear";

/// Timeouts applied to external collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterSettings {
    pub handler_timeout: Duration,
    pub classifier_timeout: Duration,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            handler_timeout: Duration::from_secs(30),
            classifier_timeout: Duration::from_secs(10),
        }
    }
}

/// Aggregate figures across all users.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemStatus {
    pub total_users: usize,
    pub total_points: u64,
    pub total_badges: usize,
    pub metrics: MetricsSnapshot,
}

/// Effects of one successful domain completion.
#[derive(Debug)]
struct Completion {
    recording: Option<MoodRecording>,
    selected_item: Option<ContentItem>,
    award: AwardOutcome,
}

/// Routes requests to domain handlers and applies their side effects.
pub struct OrchestrationRouter {
    store: Arc<dyn UserStateStore>,
    classifier: Arc<dyn IntentClassifier>,
    handlers: DomainHandlers,
    trend_engine: TrendEngine,
    selector: AntiRepetitionSelector,
    gamification: GamificationEngine,
    observability: Arc<ObservabilityCollector>,
    settings: RouterSettings,
}

impl OrchestrationRouter {
    pub fn new(
        store: Arc<dyn UserStateStore>,
        classifier: Arc<dyn IntentClassifier>,
        handlers: DomainHandlers,
    ) -> Self {
        Self {
            store,
            classifier,
            handlers,
            trend_engine: TrendEngine::default(),
            selector: AntiRepetitionSelector::new(),
            gamification: GamificationEngine::new(),
            observability: Arc::new(ObservabilityCollector::new()),
            settings: RouterSettings::default(),
        }
    }

    pub fn with_trend_engine(mut self, trend_engine: TrendEngine) -> Self {
        self.trend_engine = trend_engine;
        self
    }

    pub fn with_selector(mut self, selector: AntiRepetitionSelector) -> Self {
        self.selector = selector;
        self
    }

    pub fn with_settings(mut self, settings: RouterSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_observability(mut self, observability: Arc<ObservabilityCollector>) -> Self {
        self.observability = observability;
        self
    }

    pub fn store(&self) -> &Arc<dyn UserStateStore> {
        &self.store
    }

    /// Handles one request at the current time.
    ///
    /// # Errors
    ///
    /// `InvalidUserId` for an empty or blank id, and
    /// `InternalInvariantViolation` if a journey mutation broke an
    /// invariant. Handler failures are not errors: they produce a
    /// degraded reply.
    pub async fn handle(&self, user_id: &str, payload: InputPayload) -> Result<Response, DomainError> {
        self.handle_at(user_id, payload, Timestamp::now()).await
    }

    /// Handles one request as if it arrived at `now`.
    pub async fn handle_at(
        &self,
        user_id: &str,
        payload: InputPayload,
        now: Timestamp,
    ) -> Result<Response, DomainError> {
        let user_id = UserId::new(user_id)?;
        let request_id = RequestId::new();
        let request_key = request_id.to_string();
        let mut stages = StageTracker::new(&request_key);

        let journey = self.store.get_or_create(&user_id, now).await;
        let greeting = greeting(&journey, now);

        // ════════════════════════════════════════════════════════════════════
        // Classifying
        // ════════════════════════════════════════════════════════════════════

        stages.advance(RouterStage::Classifying)?;
        let started = Instant::now();
        let classification = match self.classify(&payload).await {
            Ok(classification) => {
                self.observability.record(CLASSIFIER_METRIC, started.elapsed());
                classification
            }
            Err(err) => {
                self.observability
                    .record_failure(CLASSIFIER_METRIC, started.elapsed());
                tracing::warn!(%user_id, request_id = %request_id, error = %err, "classification failed");
                stages.advance(RouterStage::Responding)?;
                let response = Response::new(
                    request_id,
                    user_id,
                    ResponseStatus::Degraded,
                    greeting,
                    err.user_message().to_string(),
                );
                stages.advance(RouterStage::Idle)?;
                return Ok(response);
            }
        };

        let domain = match classification {
            Classification::Domain(domain) => domain,
            Classification::Unclear => {
                self.observability.record(UNCLEAR_METRIC, started.elapsed());
                tracing::info!(%user_id, request_id = %request_id, "input unclear, asking for clarification");
                stages.advance(RouterStage::Responding)?;
                let response = Response::new(
                    request_id,
                    user_id,
                    ResponseStatus::NeedsClarification,
                    greeting,
                    clarification(),
                );
                stages.advance(RouterStage::Idle)?;
                return Ok(response);
            }
        };

        // ════════════════════════════════════════════════════════════════════
        // Dispatching
        // ════════════════════════════════════════════════════════════════════

        stages.advance(RouterStage::Dispatching)?;
        let started = Instant::now();
        let request = DomainRequest::new(user_id.clone(), domain, payload);
        let dispatched = self.dispatch(self.handlers.for_domain(domain), request).await;
        let latency = started.elapsed();

        let result = match dispatched {
            Ok(result) => result,
            Err(err) => {
                self.observability.record_failure(domain.as_str(), latency);
                tracing::warn!(
                    %user_id,
                    request_id = %request_id,
                    domain = domain.as_str(),
                    latency_ms = latency.as_millis() as u64,
                    error = %err,
                    "dispatch failed, replying with apology"
                );
                stages.advance(RouterStage::Responding)?;
                let mut response = Response::new(
                    request_id,
                    user_id,
                    ResponseStatus::Degraded,
                    greeting,
                    err.user_message().to_string(),
                );
                response.domain = Some(domain);
                response.total_points = journey.points();
                stages.advance(RouterStage::Idle)?;
                return Ok(response);
            }
        };

        // ════════════════════════════════════════════════════════════════════
        // Mutating
        // ════════════════════════════════════════════════════════════════════

        stages.advance(RouterStage::Mutating)?;
        let completed = self.complete(&user_id, domain, &result, latency, now).await;
        self.observability.record(domain.as_str(), latency);

        let mut response = Response::new(
            request_id,
            user_id.clone(),
            ResponseStatus::Served,
            greeting,
            result.content,
        );
        response.domain = Some(domain);
        response.total_points = journey.points();

        let mut intervention = None;
        match completed {
            Ok((committed, completion)) => {
                response.total_points = committed.points();
                response.points_earned = completion.award.points_earned;
                response.streak = Some(completion.award.streak_length);
                response.badges_unlocked = completion.award.new_badges;
                response.level_up = completion.award.level_up;
                response.selected_item = completion.selected_item;
                if let Some(recording) = completion.recording {
                    response.trend = Some(recording.trend());
                    intervention = recording.intervention;
                }
            }
            Err(err) if err.is_validation() => {
                tracing::warn!(
                    %user_id,
                    request_id = %request_id,
                    domain = domain.as_str(),
                    error = %err,
                    "journey update rejected, reply served without it"
                );
            }
            Err(err) => {
                tracing::error!(
                    %user_id,
                    request_id = %request_id,
                    domain = domain.as_str(),
                    error = %err,
                    "journey invariant violated, failing request"
                );
                return Err(err);
            }
        }

        if let Some(signal) = intervention {
            let note = self.intervene(&user_id, signal, now, &mut response).await?;
            response.intervention = Some(note);
        }

        // ════════════════════════════════════════════════════════════════════
        // Responding
        // ════════════════════════════════════════════════════════════════════

        stages.advance(RouterStage::Responding)?;
        tracing::info!(
            %user_id,
            request_id = %request_id,
            domain = domain.as_str(),
            latency_ms = latency.as_millis() as u64,
            points = response.points_earned,
            badges = response.badges_unlocked.len(),
            intervention = response.intervention.is_some(),
            "request served"
        );
        stages.advance(RouterStage::Idle)?;
        Ok(response)
    }

    /// Read-only copy of the process-wide counters.
    pub fn snapshot_metrics(&self) -> MetricsSnapshot {
        self.observability.snapshot()
    }

    /// Totals across every known user.
    pub async fn system_status(&self) -> SystemStatus {
        let journeys = self.store.journeys().await;
        SystemStatus {
            total_users: journeys.len(),
            total_points: journeys.iter().map(UserJourney::points).sum(),
            total_badges: journeys.iter().map(|j| j.badges().len()).sum(),
            metrics: self.snapshot_metrics(),
        }
    }

    /// Progress report for one user, `None` if they never got in touch.
    pub async fn user_stats(&self, user_id: &UserId) -> Option<UserStats> {
        let journey = self.store.get(user_id).await?;
        Some(UserStats::from(&journey))
    }

    async fn classify(&self, payload: &InputPayload) -> Result<Classification, DispatchError> {
        let limit = self.settings.classifier_timeout;
        match timeout(limit, self.classifier.classify(payload)).await {
            Ok(result) => result,
            Err(_) => Err(DispatchError::timeout(limit.as_secs())),
        }
    }

    async fn dispatch(
        &self,
        handler: &Arc<dyn DomainHandler>,
        request: DomainRequest,
    ) -> Result<DomainResult, DispatchError> {
        let limit = self.settings.handler_timeout;
        let result = match timeout(limit, handler.handle(request)).await {
            Ok(result) => result?,
            Err(_) => return Err(DispatchError::timeout(limit.as_secs())),
        };
        if result.content.trim().is_empty() {
            return Err(DispatchError::MalformedOutput("empty content".to_string()));
        }
        Ok(result)
    }

    /// Applies every effect of a successful completion in one mutation.
    async fn complete(
        &self,
        user_id: &UserId,
        domain: WellnessDomain,
        result: &DomainResult,
        latency: Duration,
        now: Timestamp,
    ) -> Result<(UserJourney, Completion), DomainError> {
        let trend_engine = &self.trend_engine;
        let selector = &self.selector;
        let gamification = &self.gamification;
        let mut outcome: Option<Completion> = None;
        let slot = &mut outcome;

        let committed = self
            .store
            .mutate(
                user_id,
                Box::new(move |journey: &mut UserJourney| -> Result<(), DomainError> {
                    let recording = match (domain, result.mood) {
                        (WellnessDomain::Mood, Some(signal)) => {
                            if let Some(level) = signal.stress_level {
                                trend_engine.record_stress(journey, level)?;
                            }
                            Some(trend_engine.record_mood(
                                journey,
                                signal.score,
                                signal.signal_count,
                                now,
                            )?)
                        }
                        _ => None,
                    };

                    let selected_item = if domain == WellnessDomain::StressRelief {
                        let pool = result
                            .offerings
                            .clone()
                            .unwrap_or_else(ContentPool::default_games);
                        let id = selector.next_item(journey, &pool.category, &pool.ids())?;
                        pool.find(&id).cloned()
                    } else {
                        None
                    };

                    let award = gamification.award(journey, ActivityType::for_domain(domain), now);
                    journey.record_latency(domain, latency);
                    journey.touch(now);

                    *slot = Some(Completion {
                        recording,
                        selected_item,
                        award,
                    });
                    Ok(())
                }),
            )
            .await?;

        let completion = outcome
            .ok_or_else(|| DomainError::invariant("journey committed without a completion"))?;
        Ok((committed, completion))
    }

    /// Invokes stress relief on top of a mood reply.
    ///
    /// A failed stress-relief call still yields a note; only an invariant
    /// violation is returned as an error.
    async fn intervene(
        &self,
        user_id: &UserId,
        signal: InterventionSignal,
        now: Timestamp,
        response: &mut Response,
    ) -> Result<InterventionNote, DomainError> {
        let domain = WellnessDomain::StressRelief;
        tracing::info!(%user_id, reason = ?signal.reason, score = signal.latest_score.value(), "proactive intervention");

        let started = Instant::now();
        let request = DomainRequest::new(
            user_id.clone(),
            domain,
            InputPayload::text("I could use a short break to de-stress."),
        );
        let dispatched = self.dispatch(self.handlers.for_domain(domain), request).await;
        let latency = started.elapsed();

        let mut note = InterventionNote {
            reason: signal.reason,
            content: None,
            selected_item: None,
        };

        let result = match dispatched {
            Ok(result) => result,
            Err(err) => {
                self.observability.record_failure(domain.as_str(), latency);
                tracing::warn!(%user_id, error = %err, "stress relief for intervention failed");
                return Ok(note);
            }
        };

        let completed = self.complete(user_id, domain, &result, latency, now).await;
        self.observability.record(domain.as_str(), latency);
        note.content = Some(result.content);

        match completed {
            Ok((committed, completion)) => {
                note.selected_item = completion.selected_item;
                response.points_earned += completion.award.points_earned;
                response.total_points = committed.points();
                response.badges_unlocked.extend(completion.award.new_badges);
                if completion.award.level_up.is_some() {
                    response.level_up = completion.award.level_up;
                }
                Ok(note)
            }
            Err(err) if err.is_validation() => {
                tracing::warn!(%user_id, error = %err, "intervention update rejected");
                Ok(note)
            }
            Err(err) => Err(err),
        }
    }
}

impl std::fmt::Debug for OrchestrationRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrchestrationRouter")
            .field("settings", &self.settings)
            .field("trend", self.trend_engine.settings())
            .finish_non_exhaustive()
    }
}

fn clarification() -> String {
    let capabilities: Vec<&str> = WellnessDomain::ALL.iter().map(WellnessDomain::label).collect();
    format!(
        "I'm not quite sure what you need yet. I can help with {}. What would you like to do?",
        capabilities.join(", ")
    )
}

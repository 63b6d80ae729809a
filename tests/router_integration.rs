//! Integration tests for the orchestration router.
//!
//! Drives `OrchestrationRouter` end-to-end through the public API with the
//! in-memory store, keyword collaborators and mock handlers.

use std::sync::Arc;
use std::time::Duration;

use mindmate::adapters::{
    CannedDomainHandler, InMemoryUserStateStore, KeywordIntentClassifier, KeywordMoodHandler,
    MockDomainHandler, MockIntentClassifier,
};
use mindmate::application::{
    DomainHandlers, OrchestrationRouter, ResponseStatus, RouterSettings, CLASSIFIER_METRIC,
};
use mindmate::domain::foundation::{ErrorCode, Timestamp, UserId};
use mindmate::domain::selection::{AntiRepetitionSelector, STRESS_GAME_CATEGORY};
use mindmate::domain::trend::{InterventionReason, Trend};
use mindmate::domain::wellness::{InputPayload, MediaReference, WellnessDomain};
use mindmate::ports::{DispatchError, DomainHandler, DomainResult, UserStateStore};

// =============================================================================
// Test Infrastructure
// =============================================================================

// 2024-01-15T10:30:00Z
const T0: u64 = 1_705_314_600;

fn at(offset_secs: u64) -> Timestamp {
    Timestamp::from_unix_secs(T0 + offset_secs)
}

fn keyword_handlers() -> DomainHandlers {
    DomainHandlers::from_fn(|domain| -> Arc<dyn DomainHandler> {
        match domain {
            WellnessDomain::Mood => Arc::new(KeywordMoodHandler::new()),
            other => Arc::new(CannedDomainHandler::new(other)),
        }
    })
}

fn keyword_router() -> (OrchestrationRouter, Arc<InMemoryUserStateStore>) {
    let store = Arc::new(InMemoryUserStateStore::default());
    let router = OrchestrationRouter::new(
        store.clone(),
        Arc::new(KeywordIntentClassifier::new()),
        keyword_handlers(),
    )
    .with_selector(AntiRepetitionSelector::seeded(7));
    (router, store)
}

fn uid(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

// =============================================================================
// Happy path
// =============================================================================

#[tokio::test]
async fn mood_message_is_scored_and_awarded() {
    let (router, store) = keyword_router();

    let response = router
        .handle_at("sarah_42", InputPayload::text("I feel so lonely today"), at(0))
        .await
        .unwrap();

    assert_eq!(response.status, ResponseStatus::Served);
    assert_eq!(response.domain, Some(WellnessDomain::Mood));
    assert_eq!(response.trend, Some(Trend::InsufficientData));
    assert_eq!(response.points_earned, 5);
    assert!(response.greeting.starts_with("Good morning, Sarah!"));

    let journey = store.get(&uid("sarah_42")).await.unwrap();
    let entry = journey.mood_history().latest().unwrap();
    assert_eq!(entry.score().value(), 4);
    assert_eq!(entry.signal_count(), 1);
}

#[tokio::test]
async fn document_payload_routes_to_content_analysis() {
    let (router, store) = keyword_router();

    let response = router
        .handle("reader", InputPayload::Document(MediaReference::new("notes.pdf")))
        .await
        .unwrap();

    assert_eq!(response.domain, Some(WellnessDomain::ContentAnalysis));
    assert_eq!(response.points_earned, 30);
    assert_eq!(store.get(&uid("reader")).await.unwrap().points(), 30);
}

#[tokio::test]
async fn fifth_game_unlocks_game_starter() {
    let (router, _store) = keyword_router();
    let mut unlocked = Vec::new();

    for i in 0..6 {
        let response = router
            .handle_at("player", InputPayload::text("give me a riddle"), at(i * 60))
            .await
            .unwrap();
        unlocked.push(response.badges_unlocked.iter().map(|b| b.id).collect::<Vec<_>>());
    }

    assert!(unlocked[..4].iter().all(Vec::is_empty));
    assert_eq!(unlocked[4], vec!["game_starter"]);
    assert!(unlocked[5].is_empty());
}

#[tokio::test]
async fn consecutive_games_do_not_repeat_within_pool() {
    let (router, store) = keyword_router();
    let mut served = Vec::new();

    // pool of 5 with window 10: each run of 5 picks is a permutation
    for i in 0..5 {
        let response = router
            .handle_at("player", InputPayload::text("let's play a game"), at(i))
            .await
            .unwrap();
        served.push(response.selected_item.unwrap().id);
    }

    let mut unique = served.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 5);
    assert_eq!(
        store.get(&uid("player")).await.unwrap().recent_items(STRESS_GAME_CATEGORY),
        served
    );
}

#[tokio::test]
async fn unclear_input_gets_clarification() {
    let (router, store) = keyword_router();

    let response = router.handle("ana", InputPayload::text("hmm")).await.unwrap();

    assert_eq!(response.status, ResponseStatus::NeedsClarification);
    assert!(response.render().contains("What would you like to do?"));
    assert_eq!(store.get(&uid("ana")).await.unwrap().points(), 0);
}

// =============================================================================
// Proactive intervention
// =============================================================================

#[tokio::test]
async fn declining_mood_triggers_stress_relief() {
    let (router, store) = keyword_router();

    for i in 0..5 {
        let response = router
            .handle_at("sam", InputPayload::text("I feel great"), at(i * 60))
            .await
            .unwrap();
        assert!(response.intervention.is_none());
    }

    let response = router
        .handle_at("sam", InputPayload::text("I feel hopeless"), at(600))
        .await
        .unwrap();

    assert_eq!(response.trend, Some(Trend::Declining));
    let note = response.intervention.clone().expect("intervention expected");
    assert_eq!(note.reason, InterventionReason::DecliningTrend);
    assert!(note.selected_item.is_some());
    assert!(response.render().contains("short break together"));

    let journey = store.get(&uid("sam")).await.unwrap();
    assert_eq!(journey.last_intervention_at(), Some(at(600)));
    assert_eq!(journey.activity_count(WellnessDomain::StressRelief), 1);

    // same calendar day: no second intervention
    let again = router
        .handle_at("sam", InputPayload::text("I feel hopeless"), at(1200))
        .await
        .unwrap();
    assert!(again.intervention.is_none());
}

#[tokio::test]
async fn failed_intervention_keeps_mood_reply() {
    let store = Arc::new(InMemoryUserStateStore::default());
    let stress = MockDomainHandler::new().with_fallback(DomainResult::text("unused"));
    let stress = stress.with_error(DispatchError::Unavailable("games offline".into()));
    let handlers = keyword_handlers().with(WellnessDomain::StressRelief, Arc::new(stress.clone()));
    let router = OrchestrationRouter::new(store.clone(), Arc::new(KeywordIntentClassifier::new()), handlers);

    for (i, text) in ["I feel hopeless"; 4].iter().enumerate() {
        router
            .handle_at("kim", InputPayload::text(*text), at(i as u64))
            .await
            .unwrap();
    }

    // stable at a low level raises the intervention on the fourth entry
    assert_eq!(stress.call_count(), 1);
    let stats = router.snapshot_metrics();
    assert_eq!(stats.get("stress_relief").unwrap().failures, 1);
    assert_eq!(stats.get("mood").unwrap().count, 4);
    let journey = store.get(&uid("kim")).await.unwrap();
    assert_eq!(journey.points(), 20);
    assert!(journey.last_intervention_at().is_some());
}

// =============================================================================
// Degradation
// =============================================================================

#[tokio::test]
async fn dispatch_failure_leaves_journey_byte_identical() {
    let store = Arc::new(InMemoryUserStateStore::default());
    let handler = MockDomainHandler::new()
        .with_text("first plan")
        .with_error(DispatchError::Generation("model overloaded".into()));
    let router = OrchestrationRouter::new(
        store.clone(),
        Arc::new(MockIntentClassifier::always(WellnessDomain::Tasks)),
        DomainHandlers::uniform(Arc::new(handler)),
    );

    router.handle_at("ana", InputPayload::text("plan"), at(0)).await.unwrap();
    let before = serde_json::to_vec(&store.get(&uid("ana")).await.unwrap()).unwrap();

    let response = router.handle_at("ana", InputPayload::text("plan"), at(60)).await.unwrap();

    assert_eq!(response.status, ResponseStatus::Degraded);
    assert_eq!(response.points_earned, 0);
    let after = serde_json::to_vec(&store.get(&uid("ana")).await.unwrap()).unwrap();
    assert_eq!(before, after);

    let stats = router.snapshot_metrics();
    let tasks = stats.get("tasks").unwrap();
    assert_eq!((tasks.count, tasks.failures), (2, 1));
}

#[tokio::test]
async fn handler_timeout_is_a_dispatch_failure() {
    let store = Arc::new(InMemoryUserStateStore::default());
    let router = OrchestrationRouter::new(
        store.clone(),
        Arc::new(MockIntentClassifier::always(WellnessDomain::MealPlanning)),
        DomainHandlers::uniform(Arc::new(
            MockDomainHandler::new().with_delay(Duration::from_millis(500)),
        )),
    )
    .with_settings(RouterSettings {
        handler_timeout: Duration::from_millis(25),
        classifier_timeout: Duration::from_secs(1),
    });

    let response = router.handle("ana", InputPayload::text("dinner")).await.unwrap();

    assert_eq!(response.status, ResponseStatus::Degraded);
    assert_eq!(store.get(&uid("ana")).await.unwrap().points(), 0);
    assert_eq!(router.snapshot_metrics().get("meal_planning").unwrap().failures, 1);
}

#[tokio::test]
async fn classifier_timeout_degrades() {
    let router = OrchestrationRouter::new(
        Arc::new(InMemoryUserStateStore::default()),
        Arc::new(MockIntentClassifier::always(WellnessDomain::Tasks).with_delay(Duration::from_millis(500))),
        DomainHandlers::uniform(Arc::new(MockDomainHandler::new())),
    )
    .with_settings(RouterSettings {
        handler_timeout: Duration::from_secs(1),
        classifier_timeout: Duration::from_millis(25),
    });

    let response = router.handle("ana", InputPayload::text("plan")).await.unwrap();

    assert_eq!(response.status, ResponseStatus::Degraded);
    assert_eq!(router.snapshot_metrics().get(CLASSIFIER_METRIC).unwrap().failures, 1);
}

#[tokio::test]
async fn out_of_range_mood_score_is_suppressed() {
    let store = Arc::new(InMemoryUserStateStore::default());
    let router = OrchestrationRouter::new(
        store.clone(),
        Arc::new(MockIntentClassifier::always(WellnessDomain::Mood)),
        DomainHandlers::uniform(Arc::new(
            MockDomainHandler::new().with_result(DomainResult::text("Thanks.").with_mood(0, 0)),
        )),
    );

    let response = router.handle("ana", InputPayload::text("meh")).await.unwrap();

    assert_eq!(response.status, ResponseStatus::Served);
    assert_eq!(response.render(), format!("{}\n\nThanks.", response.greeting));
    let journey = store.get(&uid("ana")).await.unwrap();
    assert!(journey.mood_history().is_empty());
    assert_eq!(journey.last_active_at(), None);
}

#[tokio::test]
async fn blank_user_id_is_rejected() {
    let (router, store) = keyword_router();
    for id in ["", "  "] {
        let err = router.handle(id, InputPayload::text("hi")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidUserId);
    }
    assert_eq!(store.user_count().await, 0);
}

//! Concurrency tests for per-user state isolation.
//!
//! Many requests for the same user must serialize their journey mutations
//! without lost updates; requests for different users proceed independently.

use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;

use mindmate::adapters::{InMemoryUserStateStore, MockDomainHandler, MockIntentClassifier};
use mindmate::application::{DomainHandlers, OrchestrationRouter};
use mindmate::domain::foundation::{DomainError, Timestamp, UserId};
use mindmate::domain::gamification::GamificationEngine;
use mindmate::domain::journey::UserJourney;
use mindmate::domain::trend::TrendEngine;
use mindmate::domain::wellness::{ActivityType, InputPayload, WellnessDomain};
use mindmate::ports::{DomainResult, UserStateStore};

// 2024-01-15T10:30:00Z
const T0: u64 = 1_705_314_600;

fn router_for(domain: WellnessDomain, handler: MockDomainHandler) -> (Arc<OrchestrationRouter>, Arc<InMemoryUserStateStore>) {
    let store = Arc::new(InMemoryUserStateStore::default());
    let router = OrchestrationRouter::new(
        store.clone(),
        Arc::new(MockIntentClassifier::always(domain)),
        DomainHandlers::uniform(Arc::new(handler)),
    );
    (Arc::new(router), store)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_awards_for_one_user_sum_exactly() {
    let (router, store) = router_for(
        WellnessDomain::Tasks,
        MockDomainHandler::new().with_delay(Duration::from_millis(2)),
    );
    let now = Timestamp::from_unix_secs(T0);

    let requests = (0..64).map(|_| {
        let router = Arc::clone(&router);
        tokio::spawn(async move { router.handle_at("busy", InputPayload::text("plan"), now).await })
    });
    for outcome in join_all(requests).await {
        assert!(outcome.unwrap().unwrap().is_served());
    }

    let journey = store.get(&UserId::new("busy").unwrap()).await.unwrap();
    assert_eq!(journey.points(), 64 * ActivityType::TaskPlanning.points());
    assert_eq!(journey.activity_count(WellnessDomain::Tasks), 64);
    assert_eq!(journey.streak(WellnessDomain::Tasks).unwrap().length(), 1);
    assert_eq!(journey.metrics()[&WellnessDomain::Tasks].count, 64);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_mood_recordings_keep_history_bounded() {
    let (router, store) = router_for(
        WellnessDomain::Mood,
        MockDomainHandler::new().with_fallback(DomainResult::text("noted").with_mood(6, 1)),
    );

    let requests = (0..50u64).map(|i| {
        let router = Arc::clone(&router);
        let now = Timestamp::from_unix_secs(T0 + i);
        tokio::spawn(async move { router.handle_at("moody", InputPayload::text("ok"), now).await })
    });
    for outcome in join_all(requests).await {
        outcome.unwrap().unwrap();
    }

    let journey = store.get(&UserId::new("moody").unwrap()).await.unwrap();
    assert_eq!(journey.mood_history().len(), 20);
    assert_eq!(journey.points(), 250);
    assert!(journey.check_invariants().is_ok());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn users_are_independent() {
    let (router, store) = router_for(WellnessDomain::Nutrition, MockDomainHandler::new());

    let requests = (0..40).map(|i| {
        let router = Arc::clone(&router);
        let user = format!("user_{}", i % 8);
        tokio::spawn(async move { router.handle(&user, InputPayload::text("protein?")).await })
    });
    for outcome in join_all(requests).await {
        outcome.unwrap().unwrap();
    }

    assert_eq!(store.user_count().await, 8);
    for journey in store.journeys().await {
        assert_eq!(journey.points(), 5 * ActivityType::NutritionAdvice.points());
    }
    let status = router.system_status().await;
    assert_eq!(status.total_points, 40 * ActivityType::NutritionAdvice.points());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn direct_store_mutations_do_not_lose_updates() {
    let store = Arc::new(InMemoryUserStateStore::default());
    let engine = Arc::new(GamificationEngine::new());
    let trend = Arc::new(TrendEngine::default());
    let id = UserId::new("direct").unwrap();
    let now = Timestamp::from_unix_secs(T0);

    let tasks = (0..100).map(|i| {
        let store = Arc::clone(&store);
        let engine = Arc::clone(&engine);
        let trend = Arc::clone(&trend);
        let id = id.clone();
        tokio::spawn(async move {
            store
                .mutate(
                    &id,
                    Box::new(move |journey: &mut UserJourney| -> Result<(), DomainError> {
                        trend.record_mood(journey, i % 10 + 1, 0, now)?;
                        engine.award(journey, ActivityType::MoodCheckIn, now);
                        Ok(())
                    }),
                )
                .await
        })
    });
    for outcome in join_all(tasks).await {
        outcome.unwrap().unwrap();
    }

    let journey = store.get(&id).await.unwrap();
    assert_eq!(journey.points(), 500);
    assert_eq!(journey.activity_count(WellnessDomain::Mood), 100);
    assert_eq!(journey.mood_history().len(), 20);
    assert!(journey.has_badge("self_aware"));
}

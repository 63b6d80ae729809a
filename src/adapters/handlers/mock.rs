//! Mock domain handler and intent classifier for testing.
//!
//! # Features
//!
//! - Pre-configured responses, consumed in order
//! - Simulated delays for timeout testing
//! - Error injection for failure-path testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let handler = MockDomainHandler::new()
//!     .with_text("Here's your plan")
//!     .with_delay(Duration::from_millis(100));
//!
//! let result = handler.handle(request).await?;
//! assert_eq!(result.content, "Here's your plan");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::wellness::{InputPayload, WellnessDomain};
use crate::ports::{
    Classification, DispatchError, DomainHandler, DomainRequest, DomainResult, IntentClassifier,
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ════════════════════════════════════════════════════════════════════════════
// Domain handler
// ════════════════════════════════════════════════════════════════════════════

/// Mock domain handler.
///
/// Falls back to `fallback` once the queue is drained.
#[derive(Debug, Clone)]
pub struct MockDomainHandler {
    responses: Arc<Mutex<VecDeque<Result<DomainResult, DispatchError>>>>,
    fallback: DomainResult,
    delay: Duration,
    calls: Arc<Mutex<Vec<DomainRequest>>>,
}

impl Default for MockDomainHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDomainHandler {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            fallback: DomainResult::text("Mock response"),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a plain text reply.
    pub fn with_text(self, content: impl Into<String>) -> Self {
        self.with_result(DomainResult::text(content))
    }

    /// Queues a full reply.
    pub fn with_result(self, result: DomainResult) -> Self {
        lock(&self.responses).push_back(Ok(result));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: DispatchError) -> Self {
        lock(&self.responses).push_back(Err(error));
        self
    }

    /// Sets the reply used when the queue is empty.
    pub fn with_fallback(mut self, result: DomainResult) -> Self {
        self.fallback = result;
        self
    }

    /// Sets simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this handler.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<DomainRequest> {
        lock(&self.calls).clone()
    }

    fn next_response(&self) -> Result<DomainResult, DispatchError> {
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| Ok(self.fallback.clone()))
    }
}

#[async_trait]
impl DomainHandler for MockDomainHandler {
    async fn handle(&self, request: DomainRequest) -> Result<DomainResult, DispatchError> {
        lock(&self.calls).push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        self.next_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Intent classifier
// ════════════════════════════════════════════════════════════════════════════

/// Mock intent classifier.
///
/// Answers with `fallback` once the queue is drained.
#[derive(Debug, Clone)]
pub struct MockIntentClassifier {
    responses: Arc<Mutex<VecDeque<Result<Classification, DispatchError>>>>,
    fallback: Classification,
    delay: Duration,
    calls: Arc<Mutex<Vec<InputPayload>>>,
}

impl Default for MockIntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl MockIntentClassifier {
    /// Creates a classifier that answers `Unclear` by default.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            fallback: Classification::Unclear,
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Creates a classifier that always answers `domain`.
    pub fn always(domain: WellnessDomain) -> Self {
        Self {
            fallback: Classification::Domain(domain),
            ..Self::new()
        }
    }

    /// Queues a classification.
    pub fn with_domain(self, domain: WellnessDomain) -> Self {
        lock(&self.responses).push_back(Ok(Classification::Domain(domain)));
        self
    }

    pub fn with_unclear(self) -> Self {
        lock(&self.responses).push_back(Ok(Classification::Unclear));
        self
    }

    pub fn with_error(self, error: DispatchError) -> Self {
        lock(&self.responses).push_back(Err(error));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }
}

#[async_trait]
impl IntentClassifier for MockIntentClassifier {
    async fn classify(&self, payload: &InputPayload) -> Result<Classification, DispatchError> {
        lock(&self.calls).push(payload.clone());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        lock(&self.responses)
            .pop_front()
            .unwrap_or(Ok(self.fallback))
    }
}

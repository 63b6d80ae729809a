//! Application layer - request orchestration.
//!
//! The `OrchestrationRouter` drives each request through classification,
//! dispatch, journey mutation and response assembly, reporting to the
//! `ObservabilityCollector` along the way.

mod domain_handlers;
mod observability;
mod pipeline;
mod response;
mod router;
mod stats;

pub use domain_handlers::DomainHandlers;
pub use observability::{DomainStats, MetricsSnapshot, ObservabilityCollector};
pub use pipeline::RouterStage;
pub use response::{InterventionNote, Response, ResponseStatus};
pub use router::{OrchestrationRouter, RouterSettings, SystemStatus, CLASSIFIER_METRIC, UNCLEAR_METRIC};
pub use stats::UserStats;

//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Mood history capacity must be between 1 and {max}, got {actual}")]
    InvalidHistoryCapacity { max: usize, actual: usize },

    #[error("Trend epsilon must be a finite, non-negative number, got {0}")]
    InvalidTrendEpsilon(f64),

    #[error("Intervention threshold must be between 1 and 10, got {0}")]
    InvalidInterventionThreshold(u8),

    #[error("Invalid {0} timeout (must be 1-300 seconds)")]
    InvalidTimeout(&'static str),
}

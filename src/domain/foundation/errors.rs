//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors raised when an input is rejected before any state change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Invalid user id: {reason}")]
    InvalidUserId { reason: String },

    #[error("Unknown activity type '{activity}'")]
    UnknownActivity { activity: String },

    #[error("Content pool for category '{category}' is empty")]
    EmptyPool { category: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid user id error.
    pub fn invalid_user_id(reason: impl Into<String>) -> Self {
        ValidationError::InvalidUserId {
            reason: reason.into(),
        }
    }

    /// Creates an unknown activity error.
    pub fn unknown_activity(activity: impl Into<String>) -> Self {
        ValidationError::UnknownActivity {
            activity: activity.into(),
        }
    }

    /// Creates an empty pool error.
    pub fn empty_pool(category: impl Into<String>) -> Self {
        ValidationError::EmptyPool {
            category: category.into(),
        }
    }

    /// Maps the validation failure to its error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            ValidationError::InvalidUserId { .. } => ErrorCode::InvalidUserId,
            ValidationError::UnknownActivity { .. } => ErrorCode::UnknownActivity,
            ValidationError::EmptyPool { .. } => ErrorCode::EmptyPool,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    OutOfRange,
    InvalidFormat,
    InvalidUserId,
    UnknownActivity,
    EmptyPool,

    // Dispatch errors
    DispatchFailed,
    DispatchTimeout,

    // Internal errors
    InternalInvariantViolation,
}

impl ErrorCode {
    /// Returns true for codes that reject input without touching state.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ErrorCode::ValidationFailed
                | ErrorCode::EmptyField
                | ErrorCode::OutOfRange
                | ErrorCode::InvalidFormat
                | ErrorCode::InvalidUserId
                | ErrorCode::UnknownActivity
                | ErrorCode::EmptyPool
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::InvalidUserId => "INVALID_USER_ID",
            ErrorCode::UnknownActivity => "UNKNOWN_ACTIVITY",
            ErrorCode::EmptyPool => "EMPTY_POOL",
            ErrorCode::DispatchFailed => "DISPATCH_FAILED",
            ErrorCode::DispatchTimeout => "DISPATCH_TIMEOUT",
            ErrorCode::InternalInvariantViolation => "INTERNAL_INVARIANT_VIOLATION",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
            details: HashMap::new(),
        }
        .with_detail("field", field.into())
    }

    /// Creates an invariant violation error.
    ///
    /// These should be unreachable; when raised they fail the request
    /// but never the process.
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalInvariantViolation, message)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Returns true if this error rejected an input without state change.
    pub fn is_validation(&self) -> bool {
        self.code.is_validation()
    }
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

//! Collaborator dispatch configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::application::RouterSettings;

const MAX_TIMEOUT_SECS: u64 = 300;

/// Timeouts for the intent classifier and domain handlers
#[derive(Debug, Clone, Deserialize)]
pub struct DispatchConfig {
    /// Seconds a domain handler may take before the request degrades
    #[serde(default = "default_handler_timeout")]
    pub handler_timeout_secs: u64,

    /// Seconds the intent classifier may take
    #[serde(default = "default_classifier_timeout")]
    pub classifier_timeout_secs: u64,
}

impl DispatchConfig {
    pub fn router_settings(&self) -> RouterSettings {
        RouterSettings {
            handler_timeout: Duration::from_secs(self.handler_timeout_secs),
            classifier_timeout: Duration::from_secs(self.classifier_timeout_secs),
        }
    }

    /// Validate dispatch configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.handler_timeout_secs == 0 || self.handler_timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ValidationError::InvalidTimeout("handler"));
        }
        if self.classifier_timeout_secs == 0 || self.classifier_timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ValidationError::InvalidTimeout("classifier"));
        }
        Ok(())
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            handler_timeout_secs: default_handler_timeout(),
            classifier_timeout_secs: default_classifier_timeout(),
        }
    }
}

fn default_handler_timeout() -> u64 {
    30
}

fn default_classifier_timeout() -> u64 {
    10
}

// core/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

use crate::tracking::TrackingStatus;

#[derive(Debug, Error)]
pub enum HubError {
  #[error("Step not found: {step_name}")]
  StepNotFound { step_name: String },

  #[error("Handler missing for non-optional step: {step_name}")]
  HandlerMissing { step_name: String },

  #[error("Type mismatch during context downcast (expected {expected_type})")]
  TypeMismatch { expected_type: String },

  #[error("Configuration error: {0}")]
  Configuration(String),

  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Authentication Failed: {0}")]
  Auth(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Invalid status transition for order {order_id}: '{from}' -> '{to}'")]
  InvalidTransition {
    order_id: String,
    from: TrackingStatus,
    to: TrackingStatus,
  },

  #[error("Payment Processing Error: {0}")]
  Payment(String),

  #[error("Storage error on key '{key}'. Source: {source}")]
  Storage {
    key: String,
    #[source]
    source: std::io::Error,
  },

  #[error("Malformed record under key '{key}'. Source: {source}")]
  Serialization {
    key: String,
    #[source]
    source: serde_json::Error,
  },

  #[error("Error in flow handler or external operation. Source: {source}")]
  Handler {
    #[source]
    source: AnyhowError,
  },

  #[error("Internal error: {0}")]
  Internal(String),
}

impl HubError {
  pub(crate) fn storage(key: impl Into<String>, source: std::io::Error) -> Self {
    HubError::Storage { key: key.into(), source }
  }

  pub(crate) fn serialization(key: impl Into<String>, source: serde_json::Error) -> Self {
    HubError::Serialization { key: key.into(), source }
  }
}

// An anyhow error that already carries a HubError is unwrapped instead of nested.
impl From<AnyhowError> for HubError {
  fn from(err: AnyhowError) -> Self {
    match err.downcast::<HubError>() {
      Ok(hub_err) => hub_err,
      Err(other) => HubError::Handler { source: other },
    }
  }
}

pub type HubResult<T, E = HubError> = std::result::Result<T, E>;

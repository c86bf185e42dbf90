// app/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use sharehub::HubError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error(transparent)]
  Hub(#[from] HubError),

  #[error("Configuration Error: {0}")]
  Config(String),
}

impl AppError {
  /// A request the library would reject the same way: answered with 400.
  pub fn validation(msg: impl Into<String>) -> Self {
    AppError::Hub(HubError::Validation(msg.into()))
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Hub(HubError::Validation(_)) => StatusCode::BAD_REQUEST,
      AppError::Hub(HubError::Auth(_)) => StatusCode::UNAUTHORIZED,
      AppError::Hub(HubError::NotFound(_)) => StatusCode::NOT_FOUND,
      AppError::Hub(HubError::InvalidTransition { .. }) => StatusCode::CONFLICT,
      AppError::Hub(HubError::Payment(_)) => StatusCode::PAYMENT_REQUIRED,
      _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, status = status.as_u16(), "Rejecting request");
    }

    let body = match self {
      AppError::Hub(HubError::Validation(m))
      | AppError::Hub(HubError::Auth(m))
      | AppError::Hub(HubError::NotFound(m))
      | AppError::Hub(HubError::Payment(m)) => json!({ "error": m }),
      AppError::Hub(err @ HubError::InvalidTransition { .. }) => json!({ "error": err.to_string() }),
      AppError::Config(m) => json!({ "error": "Configuration issue", "detail": m }),
      other => json!({ "error": "An internal error occurred", "detail": other.to_string() }),
    };
    HttpResponse::build(status).json(body)
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;

// app/src/web/handlers/assistant_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct AssistantPayload {
  pub message: String,
}

/// Always answers 200. Assistant failures come back as a fallback reply.
#[instrument(name = "handler::assistant", skip(app_state, req_payload))]
pub async fn assistant_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<AssistantPayload>,
) -> Result<HttpResponse, AppError> {
  let reply = app_state.hub.ask_assistant(&req_payload.message).await;
  Ok(HttpResponse::Ok().json(json!({ "reply": reply })))
}

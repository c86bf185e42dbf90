// app/src/web/handlers/stats_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::instrument;

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::global_stats", skip(app_state))]
pub async fn global_stats_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  Ok(HttpResponse::Ok().json(app_state.hub.global_stats()?))
}

#[instrument(name = "handler::user_impact", skip(app_state, path), fields(user_id = %path.as_str()))]
pub async fn user_impact_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  Ok(HttpResponse::Ok().json(app_state.hub.impact_for(&path)?))
}

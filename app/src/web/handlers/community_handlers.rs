// app/src/web/handlers/community_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use sharehub::model::all_badges;
use tracing::instrument;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewPostPayload {
  pub content: String,
  pub badge: Option<String>,
}

#[instrument(name = "handler::list_posts", skip(app_state))]
pub async fn list_posts_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  Ok(HttpResponse::Ok().json(json!({ "posts": app_state.hub.community().posts() })))
}

/// Publishes under the signed-in member's name, or the anonymous author otherwise.
#[instrument(name = "handler::create_post", skip(app_state, req_payload))]
pub async fn create_post_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<NewPostPayload>,
) -> Result<HttpResponse, AppError> {
  let author = app_state.hub.current_user()?.map(|u| u.name);
  let post = app_state
    .hub
    .community()
    .publish(author.as_deref(), &req_payload.content, req_payload.badge.as_deref())?;
  Ok(HttpResponse::Created().json(post))
}

#[instrument(name = "handler::like_post", skip(app_state, path), fields(post_id = %path.as_str()))]
pub async fn like_post_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let post = app_state.hub.community().like(&path)?;
  Ok(HttpResponse::Ok().json(post))
}

pub async fn list_badges_handler() -> HttpResponse {
  HttpResponse::Ok().json(json!({ "badges": all_badges() }))
}

// app/src/web/handlers/item_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use sharehub::model::{Category, NewItem};
use sharehub::HubError;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct ListItemsQuery {
  /// Category label, e.g. `Electronics and Gadgets`. Absent or `All` lists everything.
  pub category: Option<String>,
}

#[instrument(name = "handler::list_items", skip(app_state, query), fields(category = ?query.category))]
pub async fn list_items_handler(
  app_state: web::Data<AppState>,
  query: web::Query<ListItemsQuery>,
) -> Result<HttpResponse, AppError> {
  let catalog = app_state.hub.catalog();
  let items = match query.category.as_deref().map(str::trim) {
    None | Some("") => catalog.all()?,
    Some(label) if label.eq_ignore_ascii_case("all") => catalog.all()?,
    Some(label) => catalog.by_category(label.parse::<Category>()?)?,
  };

  Ok(HttpResponse::Ok().json(json!({ "items": items })))
}

#[instrument(name = "handler::create_item", skip(app_state, req_payload), fields(name = %req_payload.name))]
pub async fn create_item_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<NewItem>,
) -> Result<HttpResponse, AppError> {
  let item = app_state.hub.list_item(req_payload.into_inner())?;
  info!(item_id = %item.id, "Item listed through the API.");
  Ok(HttpResponse::Created().json(item))
}

#[instrument(name = "handler::get_item", skip(app_state, path), fields(item_id = %path.as_str()))]
pub async fn get_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let item = app_state.hub.catalog().get(&path)?;
  Ok(HttpResponse::Ok().json(item))
}

#[instrument(name = "handler::delete_item", skip(app_state, path), fields(item_id = %path.as_str()))]
pub async fn delete_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let item_id = path.into_inner();
  let removed = app_state.hub.catalog().delete(&item_id)?;
  if removed == 0 {
    return Err(HubError::NotFound(format!("Item '{item_id}'")).into());
  }
  Ok(HttpResponse::Ok().json(json!({ "removed": removed })))
}

#[instrument(name = "handler::user_items", skip(app_state, path), fields(user_id = %path.as_str()))]
pub async fn user_items_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let items = app_state.hub.catalog().for_owner(&path)?;
  Ok(HttpResponse::Ok().json(json!({ "items": items })))
}

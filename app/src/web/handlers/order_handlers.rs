// app/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use sharehub::TrackingStatus;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct StatusUpdatePayload {
  pub status: TrackingStatus,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AssignCarrierPayload {
  pub carrier_id: String,
}

#[instrument(name = "handler::list_orders", skip(app_state))]
pub async fn list_orders_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let orders = app_state.hub.orders().all()?;
  Ok(HttpResponse::Ok().json(json!({ "orders": orders })))
}

#[instrument(name = "handler::get_order", skip(app_state, path), fields(order_id = %path.as_str()))]
pub async fn get_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let order = app_state.hub.orders().get(&path)?;
  Ok(HttpResponse::Ok().json(json!({
      "order": order,
      "progress": order.status.progress(),
  })))
}

/// Orders the member is buying or lending.
#[instrument(name = "handler::user_orders", skip(app_state, path), fields(user_id = %path.as_str()))]
pub async fn user_orders_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let orders = app_state.hub.orders().for_user(&path)?;
  Ok(HttpResponse::Ok().json(json!({ "orders": orders })))
}

#[instrument(
    name = "handler::update_order_status",
    skip(app_state, path, req_payload),
    fields(order_id = %path.as_str(), status = %req_payload.status)
)]
pub async fn update_status_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  req_payload: web::Json<StatusUpdatePayload>,
) -> Result<HttpResponse, AppError> {
  let order = app_state
    .hub
    .update_order_status(&path, req_payload.status)
    .await?;
  info!(order_id = %order.id, status = %order.status, "Order status updated.");
  Ok(HttpResponse::Ok().json(order))
}

#[instrument(
    name = "handler::assign_carrier",
    skip(app_state, path, req_payload),
    fields(order_id = %path.as_str(), carrier_id = %req_payload.carrier_id)
)]
pub async fn assign_carrier_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  req_payload: web::Json<AssignCarrierPayload>,
) -> Result<HttpResponse, AppError> {
  let carrier_id = req_payload.carrier_id.trim();
  if carrier_id.is_empty() {
    return Err(AppError::validation("carrierId is required."));
  }
  let order = app_state.hub.orders().assign_carrier(&path, carrier_id)?;
  Ok(HttpResponse::Ok().json(order))
}

/// Jobs offered to carriers under the configured availability rule.
#[instrument(name = "handler::available_deliveries", skip(app_state))]
pub async fn available_deliveries_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let orders = app_state.hub.available_deliveries()?;
  Ok(HttpResponse::Ok().json(json!({ "deliveries": orders })))
}

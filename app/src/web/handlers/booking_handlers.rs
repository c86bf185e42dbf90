// app/src/web/handlers/booking_handlers.rs

use actix_web::{web, HttpResponse};
use sharehub::model::BookingRequest;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(
    name = "handler::create_booking",
    skip(app_state, req_payload),
    fields(item_id = %req_payload.item_id, buyer_id = %req_payload.buyer_id)
)]
pub async fn create_booking_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<BookingRequest>,
) -> Result<HttpResponse, AppError> {
  let receipt = app_state.hub.book(req_payload.into_inner()).await?;
  info!(
    order_id = %receipt.order.id,
    total_amount = receipt.total_amount,
    "Booking confirmed."
  );
  Ok(HttpResponse::Created().json(receipt))
}

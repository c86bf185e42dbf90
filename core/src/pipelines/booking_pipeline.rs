// core/src/pipelines/booking_pipeline.rs

//! Booking: quote, claim the item, pay, create the delivery order, then the
//! optional report. A claimed item is released again by `Hub::book` when a
//! later step fails.

use chrono::Utc;
use tracing::{event, info, warn, Level};

use crate::error::HubError;
use crate::model::{new_id, Order, SustainabilityReport};
use crate::pipelines::contexts::BookingCtxData;
use crate::services::payment_mock;
use crate::settings::MONEY_SAVED_FACTOR;
use crate::tracking::TrackingStatus;
use crate::workflow::{FlowContext, FlowRegistry, StepControl, Workflow};
use crate::HubResult;

/// ETA shown on a freshly placed order until a carrier picks it up.
pub const PENDING_ETA: &str = "pending";

pub const TOTAL_TOO_LARGE: &str = "Booking total is too large.";

pub fn register_booking_pipeline(registry: &FlowRegistry) -> HubResult<()> {
  let mut booking = Workflow::<BookingCtxData>::new(
    "booking",
    &[
      ("load_item", false),
      ("quote_booking", false),
      ("claim_item", false),
      ("process_payment", false),
      ("place_order", false),
      ("sustainability_report", true),
    ],
  );

  booking.on("load_item", |ctx: FlowContext<BookingCtxData>| async move {
    let (catalog, item_id) = {
      let guard = ctx.read();
      (guard.state.catalog.clone(), guard.request.item_id.clone())
    };
    let item = catalog.get(&item_id)?;
    ctx.write().item = Some(item);
    Ok::<_, HubError>(StepControl::Continue)
  })?;

  booking.on("quote_booking", |ctx: FlowContext<BookingCtxData>| async move {
    let mut guard = ctx.write();
    let quantity = guard.request.details.quantity;
    if quantity == 0 {
      return Err(HubError::Validation("Quantity must be at least 1.".to_string()));
    }
    if guard.request.delivery_address.trim().is_empty() {
      return Err(HubError::Validation("Delivery address is required.".to_string()));
    }
    let price_per_day = guard
      .item
      .as_ref()
      .map(|item| item.price_per_day)
      .ok_or_else(|| HubError::Internal("Item missing before quote.".to_string()))?;
    guard.total_amount = u64::from(quantity)
      .checked_mul(price_per_day)
      .ok_or_else(|| HubError::Validation(TOTAL_TOO_LARGE.to_string()))?;
    event!(Level::DEBUG, quantity, price_per_day, total = guard.total_amount, "Booking quoted.");
    Ok(StepControl::Continue)
  })?;

  // Availability is decided here, under the store lock, not in `load_item`.
  booking.on("claim_item", |ctx: FlowContext<BookingCtxData>| async move {
    let (catalog, item_id) = {
      let guard = ctx.read();
      (guard.state.catalog.clone(), guard.request.item_id.clone())
    };
    let item = catalog.claim(&item_id).map_err(|err| {
      warn!(%item_id, error = %err, "Item could not be claimed.");
      err
    })?;
    let mut guard = ctx.write();
    guard.item = Some(item);
    guard.item_claimed = true;
    Ok::<_, HubError>(StepControl::Continue)
  })?;

  booking.on("process_payment", |ctx: FlowContext<BookingCtxData>| async move {
    let (amount, method, latency) = {
      let guard = ctx.read();
      (
        guard.total_amount,
        guard.request.payment_method,
        guard.state.settings.payment_latency,
      )
    };
    // Lock released above; the simulated gateway may sleep.
    let confirmation = payment_mock::charge(amount, method, latency).await?;
    ctx.write().payment = Some(confirmation);
    Ok::<_, HubError>(StepControl::Continue)
  })?;

  booking.on("place_order", |ctx: FlowContext<BookingCtxData>| async move {
    let (orders, item, request) = {
      let guard = ctx.read();
      (guard.state.orders.clone(), guard.item.clone(), guard.request.clone())
    };
    let item = item.ok_or_else(|| HubError::Internal("Item missing before order placement.".to_string()))?;

    let order = Order {
      id: format!("ORD-{}", new_id()[..8].to_uppercase()),
      item_id: item.id.clone(),
      item_name: item.name.clone(),
      item_image: item.image_url.clone(),
      buyer_id: request.buyer_id,
      owner_id: item.owner_id.clone(),
      carrier_id: None,
      status: TrackingStatus::OrderPlaced,
      order_date: Utc::now(),
      delivery_date: None,
      pickup_address: format!("{} ({} away)", item.owner_name, item.distance),
      delivery_address: request.delivery_address.trim().to_string(),
      eta: PENDING_ETA.to_string(),
    };
    orders.save(&order)?;
    info!(order_id = %order.id, item_id = %item.id, "Order placed.");
    ctx.write().order = Some(order);
    Ok::<_, HubError>(StepControl::Continue)
  })?;

  booking.on("sustainability_report", |ctx: FlowContext<BookingCtxData>| async move {
    let mut guard = ctx.write();
    let money_saved = guard
      .total_amount
      .checked_mul(MONEY_SAVED_FACTOR)
      .ok_or_else(|| HubError::Validation(TOTAL_TOO_LARGE.to_string()))?;
    let report = SustainabilityReport {
      co2_saved_kg: guard.state.settings.co2_per_share_kg,
      money_saved,
    };
    guard.report = Some(report);
    Ok::<_, HubError>(StepControl::Continue)
  })?;

  registry.register(booking);
  info!("Booking pipeline registered.");
  Ok(())
}

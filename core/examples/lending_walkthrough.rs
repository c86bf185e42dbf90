// core/examples/lending_walkthrough.rs

//! Signs a member up, books an item and walks its order through every tracking status.

use chrono::NaiveDate;
use sharehub::model::{BookingDetails, BookingRequest, PaymentMethod};
use sharehub::{Hub, HubResult, SignupForm, TrackingStatus};
use tracing::info;

#[tokio::main]
async fn main() -> HubResult<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Lending Walkthrough ---");
  let hub = Hub::in_memory()?;

  // 1. A new member joins
  let member = hub
    .signup(SignupForm {
      name: "Asha Rao".to_string(),
      email: "asha@example.com".to_string(),
      contact_no: "9876543210".to_string(),
      address: "KV Narela, Delhi".to_string(),
      password: "lend-more".to_string(),
    })
    .await?;
  info!(user_id = %member.id, role = ?member.role, "Signed up.");

  // 2. They borrow the projector for two days
  let receipt = hub
    .book(BookingRequest {
      item_id: "3".to_string(),
      buyer_id: member.id.clone(),
      delivery_address: member.address.clone(),
      details: BookingDetails {
        quantity: 2,
        pickup_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap_or(NaiveDate::MIN),
        lending_time: "18:30".to_string(),
      },
      payment_method: PaymentMethod::Upi,
    })
    .await?;
  info!(order_id = %receipt.order.id, total = receipt.total_amount, "Booked.");
  if let Some(report) = &receipt.report {
    info!(co2_kg = report.co2_saved_kg, money_saved = report.money_saved, "Sustainability report.");
  }

  // 3. A carrier claims the job and moves it along
  hub.orders().assign_carrier(&receipt.order.id, "carrier-1")?;
  let mut status = receipt.order.status;
  while let Some(next) = status.next() {
    let order = hub.update_order_status(&receipt.order.id, next).await?;
    status = order.status;
    info!(status = %status, progress = status.progress(), "Tracking update.");
  }
  assert_eq!(status, TrackingStatus::Delivered);

  let stats = hub.global_stats()?;
  info!(items = stats.total_items, shares = stats.total_shares, co2 = %stats.co2_saved, "Hub totals.");
  Ok(())
}

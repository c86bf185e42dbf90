// tests/booking_tests.rs
mod common;

use std::time::Duration;

use common::*;
use serial_test::serial;
use sharehub::model::{ItemStatus, ShareItem};
use sharehub::store::Record;
use sharehub::{Hub, HubError, HubSettings, Store, TrackingStatus};

#[tokio::test]
#[serial]
async fn booking_places_order_and_reports_savings() {
  setup_tracing();
  let hub = memory_hub();
  let receipt = hub.book(booking_request("2", "u9", 2)).await.unwrap();

  assert_eq!(receipt.total_amount, 600);
  assert!(receipt.payment_reference.starts_with("PAY-"));
  let report = receipt.report.expect("report step should run");
  assert_eq!(report.co2_saved_kg, 4.2);
  assert_eq!(report.money_saved, 3000);

  let order = &receipt.order;
  assert_eq!(order.status, TrackingStatus::OrderPlaced);
  assert_eq!(order.item_name, "Microwave Oven");
  assert_eq!(order.owner_id, "u2");
  assert_eq!(order.buyer_id, "u9");
  assert_eq!(order.delivery_address, "KV Narela, Delhi");
  assert!(order.carrier_id.is_none());

  let stored = hub.orders().get(&order.id).unwrap();
  assert_eq!(&stored, order);
  assert_eq!(hub.orders().all().unwrap().len(), 2);
}

#[tokio::test]
#[serial]
async fn booked_item_is_rented_but_lending_count_unchanged() {
  setup_tracing();
  let hub = memory_hub();
  hub.book(booking_request("1", "u9", 1)).await.unwrap();

  let drill = hub.catalog().get("1").unwrap();
  assert_eq!(drill.status, ItemStatus::Rented);
  assert_eq!(drill.lending_count, 15);

  let err = hub.book(booking_request("1", "u8", 1)).await.unwrap_err();
  assert!(matches!(err, HubError::Validation(_)));
}

#[tokio::test]
#[serial]
async fn zero_quantity_is_rejected_before_payment() {
  setup_tracing();
  let hub = memory_hub();
  let err = hub.book(booking_request("3", "u9", 0)).await.unwrap_err();
  assert!(matches!(err, HubError::Validation(_)));
  assert_eq!(hub.orders().all().unwrap().len(), 1);
  assert!(hub.catalog().get("3").unwrap().is_available());
}

#[tokio::test]
#[serial]
async fn unknown_item_is_not_found() {
  setup_tracing();
  let hub = memory_hub();
  let err = hub.book(booking_request("nope", "u9", 1)).await.unwrap_err();
  assert!(matches!(err, HubError::NotFound(_)));
}

#[tokio::test]
#[serial]
async fn payment_latency_is_honoured() {
  setup_tracing();
  let settings = HubSettings::default().with_payment_latency(Duration::from_millis(20));
  let hub = Hub::new(Store::in_memory(), settings).unwrap();

  let started = std::time::Instant::now();
  hub.book(booking_request("3", "u9", 1)).await.unwrap();
  assert!(started.elapsed() >= Duration::from_millis(20));
}

#[tokio::test]
#[serial]
async fn listed_item_gets_defaults_and_can_be_booked() {
  setup_tracing();
  let hub = memory_hub();
  let err = hub
    .list_item(serde_json::from_value(serde_json::json!({
      "name": "Ladder", "category": "Tools and Equipment", "pricePerDay": 90
    }))
    .unwrap())
    .unwrap_err();
  assert!(matches!(err, HubError::Auth(_)));

  let owner = hub.signup(signup_form("Asha", "asha@example.com", "lend-more")).await.unwrap();
  let ladder: ShareItem = hub
    .list_item(serde_json::from_value(serde_json::json!({
      "name": "Ladder", "category": "Tools and Equipment", "pricePerDay": 90
    }))
    .unwrap())
    .unwrap();

  assert_eq!(ladder.owner_id, owner.id);
  assert_eq!(ladder.distance, "0.1 km");
  assert_eq!(ladder.lending_count, 0);
  assert_eq!(ladder.image_url, format!("https://picsum.photos/seed/{}/400/300", ladder.id));
  assert_eq!(hub.catalog().for_owner(&owner.id).unwrap(), vec![ladder.clone()]);

  let receipt = hub.book(booking_request(&ladder.id, "u1", 3)).await.unwrap();
  assert_eq!(receipt.total_amount, 270);
  assert_eq!(receipt.order.owner_id, owner.id);
}

#[tokio::test]
#[serial]
async fn listing_price_is_capped() {
  setup_tracing();
  let hub = memory_hub();
  hub.signup(signup_form("Asha", "asha@example.com", "lend-more")).await.unwrap();
  let err = hub
    .list_item(serde_json::from_value(serde_json::json!({
      "name": "Gold Drill", "category": "Tools and Equipment", "pricePerDay": 10_000_000_000_000_000u64
    }))
    .unwrap())
    .unwrap_err();
  assert!(matches!(err, HubError::Validation(_)));
}

#[tokio::test]
#[serial]
async fn oversized_total_is_rejected_without_claiming_the_item() {
  setup_tracing();
  let hub = memory_hub();
  // A stored record can carry a price no new listing could.
  let mut pricey = ShareItem::seed().remove(0);
  pricey.id = "pricey".to_string();
  pricey.price_per_day = 10_000_000_000_000_000;
  hub.catalog().save(&pricey).unwrap();

  let err = hub.book(booking_request("pricey", "u1", 3000)).await.unwrap_err();
  assert!(matches!(err, HubError::Validation(ref m) if m == "Booking total is too large."));
  assert!(hub.catalog().get("pricey").unwrap().is_available());
  assert_eq!(hub.orders().all().unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[serial]
async fn concurrent_bookings_of_one_item_yield_one_order() {
  setup_tracing();
  let settings = HubSettings::default().with_payment_latency(Duration::from_millis(50));
  let hub = Hub::new(Store::in_memory(), settings).unwrap();

  let (first, second) = tokio::join!(
    hub.book(booking_request("3", "u8", 1)),
    hub.book(booking_request("3", "u9", 1))
  );

  assert_eq!(first.is_ok() as u8 + second.is_ok() as u8, 1);
  let loser = if first.is_ok() { second } else { first };
  assert!(matches!(loser, Err(HubError::Validation(_))));
  assert_eq!(hub.orders().all().unwrap().len(), 2);
  assert_eq!(hub.catalog().get("3").unwrap().status, ItemStatus::Rented);
}

#[tokio::test]
#[serial]
async fn failed_payment_releases_the_claimed_item() {
  setup_tracing();
  let hub = memory_hub();
  // Free items pass the quote but the gateway refuses a zero charge.
  let mut free = ShareItem::seed().remove(0);
  free.id = "free".to_string();
  free.price_per_day = 0;
  hub.catalog().save(&free).unwrap();

  let err = hub.book(booking_request("free", "u1", 1)).await.unwrap_err();
  assert!(matches!(err, HubError::Payment(_)));
  assert!(hub.catalog().get("free").unwrap().is_available());
  assert_eq!(hub.orders().all().unwrap().len(), 1);
}

// tests/orders_tests.rs
mod common;

use common::*;
use serial_test::serial;
use sharehub::{AvailabilityRule, Hub, HubError, HubSettings, Store, TrackingStatus, TransitionPolicy};

#[tokio::test]
#[serial]
async fn override_policy_allows_backward_and_reopening() {
  setup_tracing();
  let hub = memory_hub();

  let delivered = hub.update_order_status("ORD-001", TrackingStatus::Delivered).await.unwrap();
  assert_eq!(delivered.status, TrackingStatus::Delivered);

  let reopened = hub.update_order_status("ORD-001", TrackingStatus::OrderPlaced).await.unwrap();
  assert_eq!(reopened.status, TrackingStatus::OrderPlaced);
  assert!(reopened.delivery_date.is_none());
  assert_eq!(hub.orders().get("ORD-001").unwrap().status, TrackingStatus::OrderPlaced);
}

#[tokio::test]
#[serial]
async fn status_update_leaves_other_fields_alone() {
  setup_tracing();
  let hub = memory_hub();
  let before = hub.orders().get("ORD-001").unwrap();
  let after = hub.update_order_status("ORD-001", TrackingStatus::OutForDelivery).await.unwrap();
  assert_eq!(after.eta, before.eta);
  assert_eq!(after.pickup_address, before.pickup_address);
  assert_eq!(after.order_date, before.order_date);
  assert_eq!(hub.orders().all().unwrap().len(), 1);
}

#[tokio::test]
#[serial]
async fn forward_only_policy_rejects_going_back() {
  setup_tracing();
  let settings = HubSettings::default().with_transition_policy(TransitionPolicy::ForwardOnly);
  let hub = Hub::new(Store::in_memory(), settings).unwrap();

  hub.update_order_status("ORD-001", TrackingStatus::Delivered).await.unwrap();
  let err = hub
    .update_order_status("ORD-001", TrackingStatus::PickedUp)
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    HubError::InvalidTransition { from: TrackingStatus::Delivered, to: TrackingStatus::PickedUp, .. }
  ));
  assert_eq!(hub.orders().get("ORD-001").unwrap().status, TrackingStatus::Delivered);
}

#[tokio::test]
#[serial]
async fn forward_only_flow_accepts_repeats_and_skips() {
  setup_tracing();
  let settings = HubSettings::default().with_transition_policy(TransitionPolicy::ForwardOnly);
  let hub = Hub::new(Store::in_memory(), settings).unwrap();

  let same = hub.update_order_status("ORD-001", TrackingStatus::InTransit).await.unwrap();
  assert_eq!(same.status, TrackingStatus::InTransit);
  let skipped = hub.update_order_status("ORD-001", TrackingStatus::Delivered).await.unwrap();
  assert_eq!(skipped.status, TrackingStatus::Delivered);
  assert!(hub
    .update_order_status("ORD-001", TrackingStatus::OutForDelivery)
    .await
    .is_err());
}

#[tokio::test]
#[serial]
async fn unknown_order_is_not_found() {
  setup_tracing();
  let hub = memory_hub();
  let err = hub.update_order_status("ORD-404", TrackingStatus::Delivered).await.unwrap_err();
  assert!(matches!(err, HubError::NotFound(_)));
}

#[tokio::test]
#[serial]
async fn union_filter_keeps_delivered_unclaimed_orders() {
  setup_tracing();
  let hub = memory_hub();
  hub.update_order_status("ORD-001", TrackingStatus::Delivered).await.unwrap();
  let ids: Vec<String> = hub.available_deliveries().unwrap().into_iter().map(|o| o.id).collect();
  assert_eq!(ids, vec!["ORD-001"]);

  hub.orders().assign_carrier("ORD-001", "c7").unwrap();
  assert!(hub.available_deliveries().unwrap().is_empty());
}

#[tokio::test]
#[serial]
async fn unclaimed_filter_hides_claimed_orders() {
  setup_tracing();
  let settings = HubSettings::default().with_availability_rule(AvailabilityRule::Unclaimed);
  let hub = Hub::new(Store::in_memory(), settings).unwrap();
  assert_eq!(hub.available_deliveries().unwrap().len(), 1);

  let claimed = hub.orders().assign_carrier("ORD-001", "c7").unwrap();
  assert_eq!(claimed.carrier_id.as_deref(), Some("c7"));
  assert!(hub.available_deliveries().unwrap().is_empty());
}

#[tokio::test]
#[serial]
async fn user_orders_cover_buyer_and_owner() {
  setup_tracing();
  let hub = memory_hub();
  hub.book(booking_request("3", "u1", 1)).await.unwrap();

  assert_eq!(hub.orders().for_user("u1").unwrap().len(), 2);
  assert_eq!(hub.orders().for_user("u2").unwrap().len(), 1);
  assert_eq!(hub.orders().for_user("u3").unwrap().len(), 1);
  assert!(hub.orders().for_user("nobody").unwrap().is_empty());
}

#[test]
fn progress_matches_pipeline_position() {
  let fractions: Vec<f64> = TrackingStatus::ALL.iter().map(|s| s.progress()).collect();
  assert_eq!(fractions, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
}

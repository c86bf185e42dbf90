// core/src/model/order.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Record;
use crate::tracking::TrackingStatus;

/// A delivery of one item from its owner to a borrower.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
  pub id: String,
  pub item_id: String,
  pub item_name: String,
  pub item_image: String,
  pub buyer_id: String,
  pub owner_id: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub carrier_id: Option<String>,
  pub status: TrackingStatus,
  pub order_date: DateTime<Utc>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub delivery_date: Option<DateTime<Utc>>,
  pub pickup_address: String,
  pub delivery_address: String,
  /// Free text, set when the order is created and never recomputed.
  pub eta: String,
}

impl Order {
  pub fn involves(&self, user_id: &str) -> bool {
    self.buyer_id == user_id || self.owner_id == user_id
  }
}

impl Record for Order {
  const COLLECTION: &'static str = crate::store::ORDERS_KEY;

  fn key(&self) -> &str {
    &self.id
  }

  fn seed() -> Vec<Self> {
    vec![Order {
      id: "ORD-001".to_string(),
      item_id: "1".to_string(),
      item_name: "Drill Machine".to_string(),
      item_image: "https://picsum.photos/seed/drill/400/300".to_string(),
      buyer_id: "u1".to_string(),
      owner_id: "u2".to_string(),
      carrier_id: None,
      status: TrackingStatus::InTransit,
      order_date: Utc::now(),
      delivery_date: None,
      pickup_address: "Sector 15, Rohini, Delhi".to_string(),
      delivery_address: "KV Narela, Delhi".to_string(),
      eta: "45 mins".to_string(),
    }]
  }
}

// core/src/deliveries.rs

//! Which orders the carrier view lists as open delivery jobs.

use std::str::FromStr;

use crate::error::HubError;
use crate::model::Order;
use crate::tracking::TrackingStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvailabilityRule {
  /// An order is listed when it has no carrier OR is not yet delivered.
  /// Delivered orders without a carrier and claimed orders in flight both show up.
  #[default]
  Union,
  /// An order is listed only when it has no carrier AND is not yet delivered.
  Unclaimed,
}

impl AvailabilityRule {
  pub fn admits(self, order: &Order) -> bool {
    let unclaimed = order.carrier_id.is_none();
    let open = order.status != TrackingStatus::Delivered;
    match self {
      AvailabilityRule::Union => unclaimed || open,
      AvailabilityRule::Unclaimed => unclaimed && open,
    }
  }

  pub fn filter<'a>(self, orders: impl IntoIterator<Item = &'a Order>) -> Vec<&'a Order> {
    orders.into_iter().filter(|o| self.admits(o)).collect()
  }
}

impl FromStr for AvailabilityRule {
  type Err = HubError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "union" => Ok(AvailabilityRule::Union),
      "unclaimed" => Ok(AvailabilityRule::Unclaimed),
      other => Err(HubError::Configuration(format!("Unknown delivery filter '{other}'"))),
    }
  }
}

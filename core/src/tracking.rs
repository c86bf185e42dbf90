// core/src/tracking.rs

//! The order tracking state machine.
//!
//! Orders move through five statuses in a fixed total order. Which moves an
//! operator may make is decided by a `TransitionPolicy`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HubError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackingStatus {
  #[serde(rename = "Order Placed")]
  OrderPlaced,
  #[serde(rename = "Picked Up")]
  PickedUp,
  #[serde(rename = "In Transit")]
  InTransit,
  #[serde(rename = "Out for Delivery")]
  OutForDelivery,
  #[serde(rename = "Delivered")]
  Delivered,
}

impl TrackingStatus {
  /// Every status, in pipeline order.
  pub const ALL: [TrackingStatus; 5] = [
    TrackingStatus::OrderPlaced,
    TrackingStatus::PickedUp,
    TrackingStatus::InTransit,
    TrackingStatus::OutForDelivery,
    TrackingStatus::Delivered,
  ];

  pub fn index(self) -> usize {
    match self {
      TrackingStatus::OrderPlaced => 0,
      TrackingStatus::PickedUp => 1,
      TrackingStatus::InTransit => 2,
      TrackingStatus::OutForDelivery => 3,
      TrackingStatus::Delivered => 4,
    }
  }

  /// Fractional completion in `[0.0, 1.0]`, as drawn by the tracking progress bar.
  pub fn progress(self) -> f64 {
    self.index() as f64 / (Self::ALL.len() - 1) as f64
  }

  /// The following status, or `None` once delivered.
  pub fn next(self) -> Option<TrackingStatus> {
    Self::ALL.get(self.index() + 1).copied()
  }

  pub fn is_terminal(self) -> bool {
    self == TrackingStatus::Delivered
  }

  pub fn label(self) -> &'static str {
    match self {
      TrackingStatus::OrderPlaced => "Order Placed",
      TrackingStatus::PickedUp => "Picked Up",
      TrackingStatus::InTransit => "In Transit",
      TrackingStatus::OutForDelivery => "Out for Delivery",
      TrackingStatus::Delivered => "Delivered",
    }
  }
}

impl fmt::Display for TrackingStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

impl FromStr for TrackingStatus {
  type Err = HubError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .iter()
      .copied()
      .find(|status| status.label().eq_ignore_ascii_case(s.trim()))
      .ok_or_else(|| HubError::Validation(format!("Unknown tracking status '{s}'")))
  }
}

/// Which status changes are accepted for an existing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
  /// Any status may be written over any other, backward moves and reopening included.
  #[default]
  Override,
  /// Only moves that keep or advance the pipeline position are accepted.
  ForwardOnly,
}

impl TransitionPolicy {
  pub fn check(self, order_id: &str, from: TrackingStatus, to: TrackingStatus) -> Result<(), HubError> {
    match self {
      TransitionPolicy::Override => Ok(()),
      TransitionPolicy::ForwardOnly if to.index() >= from.index() => Ok(()),
      TransitionPolicy::ForwardOnly => Err(HubError::InvalidTransition {
        order_id: order_id.to_string(),
        from,
        to,
      }),
    }
  }
}

impl FromStr for TransitionPolicy {
  type Err = HubError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "override" => Ok(TransitionPolicy::Override),
      "forward_only" | "forward-only" => Ok(TransitionPolicy::ForwardOnly),
      other => Err(HubError::Configuration(format!("Unknown transition policy '{other}'"))),
    }
  }
}

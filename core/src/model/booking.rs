// core/src/model/booking.rs

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Order;
use crate::error::HubError;

/// What the borrower fills in on the booking form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
  pub quantity: u32,
  pub pickup_date: NaiveDate,
  /// Preferred pickup time of day, free text (e.g. `18:30`).
  pub lending_time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
  #[serde(rename = "ICICI Bank")]
  IciciBank,
  #[serde(rename = "SBI Bank")]
  SbiBank,
  #[serde(rename = "UPI Payment")]
  Upi,
}

impl PaymentMethod {
  pub const ALL: [PaymentMethod; 3] = [PaymentMethod::IciciBank, PaymentMethod::SbiBank, PaymentMethod::Upi];

  pub fn label(self) -> &'static str {
    match self {
      PaymentMethod::IciciBank => "ICICI Bank",
      PaymentMethod::SbiBank => "SBI Bank",
      PaymentMethod::Upi => "UPI Payment",
    }
  }
}

impl fmt::Display for PaymentMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

impl FromStr for PaymentMethod {
  type Err = HubError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let wanted = s.trim().to_ascii_lowercase();
    Self::ALL
      .iter()
      .copied()
      .find(|m| m.label().to_ascii_lowercase() == wanted || (wanted == "upi" && *m == PaymentMethod::Upi))
      .ok_or_else(|| HubError::Validation(format!("Unknown payment method '{s}'")))
  }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
  pub item_id: String,
  pub buyer_id: String,
  pub delivery_address: String,
  #[serde(flatten)]
  pub details: BookingDetails,
  pub payment_method: PaymentMethod,
}

/// Shown to the borrower once a booking is paid for.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SustainabilityReport {
  pub co2_saved_kg: f64,
  pub money_saved: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingReceipt {
  pub order: Order,
  pub total_amount: u64,
  pub payment_reference: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub report: Option<SustainabilityReport>,
}

// core/src/model/loan.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
  Pending,
  Cleared,
}

/// An outstanding payment for a borrowed item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
  pub id: String,
  pub item_id: String,
  pub item_name: String,
  pub owner_name: String,
  pub amount: u64,
  pub status: LoanStatus,
  pub due_date: NaiveDate,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
}

impl Loan {
  pub(crate) fn seed() -> Vec<Self> {
    vec![Loan {
      id: "L1".to_string(),
      item_id: "2".to_string(),
      item_name: "Microwave Oven".to_string(),
      owner_name: "Priya Verma".to_string(),
      amount: 600,
      status: LoanStatus::Pending,
      due_date: NaiveDate::from_ymd_opt(2023, 12, 25).unwrap_or(NaiveDate::MIN),
      message: Some("Please return in clean condition!".to_string()),
    }]
  }
}

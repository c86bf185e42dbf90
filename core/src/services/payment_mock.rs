// core/src/services/payment_mock.rs

//! Simulated payment gateway. No money moves; any non-zero amount succeeds.

use std::time::Duration;

use tracing::{info, instrument};

use crate::error::{HubError, HubResult};
use crate::model::PaymentMethod;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentConfirmation {
  pub reference: String,
  pub amount: u64,
  pub method: PaymentMethod,
}

#[instrument(name = "payment_mock::charge", skip(method, latency), fields(method = %method))]
pub async fn charge(amount: u64, method: PaymentMethod, latency: Duration) -> HubResult<PaymentConfirmation> {
  if amount == 0 {
    return Err(HubError::Payment("Amount must be greater than zero".to_string()));
  }
  if !latency.is_zero() {
    tokio::time::sleep(latency).await;
  }

  let reference = format!("PAY-{}", uuid::Uuid::new_v4().simple());
  info!(%reference, "Mock payment succeeded.");
  Ok(PaymentConfirmation {
    reference,
    amount,
    method,
  })
}

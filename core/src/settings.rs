// core/src/settings.rs

//! Behavioral knobs for a hub instance.

use std::time::Duration;

use crate::deliveries::AvailabilityRule;
use crate::tracking::TransitionPolicy;

/// Kilograms of CO2 credited for every completed share.
pub const CO2_PER_SHARE_KG: f64 = 4.2;

/// Multiplier applied to a booking total to estimate what buying new would have cost.
pub const MONEY_SAVED_FACTOR: u64 = 5;

#[derive(Debug, Clone)]
pub struct HubSettings {
  /// Which status changes an operator may apply to an order.
  pub transition_policy: TransitionPolicy,
  /// Which orders the carrier view lists as available jobs.
  pub availability_rule: AvailabilityRule,
  pub co2_per_share_kg: f64,
  /// Artificial delay for the simulated payment gateway. Zero disables it.
  pub payment_latency: Duration,
}

impl Default for HubSettings {
  fn default() -> Self {
    Self {
      transition_policy: TransitionPolicy::Override,
      availability_rule: AvailabilityRule::Union,
      co2_per_share_kg: CO2_PER_SHARE_KG,
      payment_latency: Duration::ZERO,
    }
  }
}

impl HubSettings {
  pub fn with_transition_policy(mut self, policy: TransitionPolicy) -> Self {
    self.transition_policy = policy;
    self
  }

  pub fn with_availability_rule(mut self, rule: AvailabilityRule) -> Self {
    self.availability_rule = rule;
    self
  }

  pub fn with_payment_latency(mut self, latency: Duration) -> Self {
    self.payment_latency = latency;
    self
  }
}

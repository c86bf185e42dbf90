// core/src/services/orders.rs

use tracing::{info, instrument};

use crate::deliveries::AvailabilityRule;
use crate::error::{HubError, HubResult};
use crate::model::Order;
use crate::store::Store;
use crate::tracking::{TrackingStatus, TransitionPolicy};

#[derive(Debug, Clone)]
pub struct OrderBook {
  store: Store,
}

impl OrderBook {
  pub fn new(store: Store) -> Self {
    Self { store }
  }

  pub fn all(&self) -> HubResult<Vec<Order>> {
    self.store.all()
  }

  pub fn get(&self, order_id: &str) -> HubResult<Order> {
    self
      .store
      .find::<Order>(order_id)?
      .ok_or_else(|| HubError::NotFound(format!("Order '{order_id}'")))
  }

  /// Save-by-id: replaces the order with the same id, or appends it.
  pub fn save(&self, order: &Order) -> HubResult<()> {
    self.store.upsert(order)
  }

  /// Orders where `user_id` is the buyer or the owner.
  pub fn for_user(&self, user_id: &str) -> HubResult<Vec<Order>> {
    Ok(self.all()?.into_iter().filter(|o| o.involves(user_id)).collect())
  }

  pub fn available_deliveries(&self, rule: AvailabilityRule) -> HubResult<Vec<Order>> {
    Ok(self.all()?.into_iter().filter(|o| rule.admits(o)).collect())
  }

  /// Overwrites an order's status after checking it against `policy`.
  /// Load, check and write happen under one store lock.
  #[instrument(name = "OrderBook::set_status", skip(self, status, policy), fields(status = %status, policy = ?policy), err(Display))]
  pub fn set_status(&self, order_id: &str, status: TrackingStatus, policy: TransitionPolicy) -> HubResult<Order> {
    self.store.update::<Order, _>(|orders| {
      let order = orders
        .iter_mut()
        .find(|o| o.id == order_id)
        .ok_or_else(|| HubError::NotFound(format!("Order '{order_id}'")))?;
      policy.check(order_id, order.status, status)?;
      let from = order.status;
      order.status = status;
      info!(%from, to = %status, "Order status overwritten.");
      Ok(order.clone())
    })
  }

  #[instrument(name = "OrderBook::assign_carrier", skip(self), err(Display))]
  pub fn assign_carrier(&self, order_id: &str, carrier_id: &str) -> HubResult<Order> {
    if carrier_id.trim().is_empty() {
      return Err(HubError::Validation("Carrier id is required.".to_string()));
    }
    self.store.update::<Order, _>(|orders| {
      let order = orders
        .iter_mut()
        .find(|o| o.id == order_id)
        .ok_or_else(|| HubError::NotFound(format!("Order '{order_id}'")))?;
      order.carrier_id = Some(carrier_id.to_string());
      info!("Carrier assigned.");
      Ok(order.clone())
    })
  }
}

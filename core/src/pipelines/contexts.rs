// core/src/pipelines/contexts.rs

//! Working data of each registered workflow. Handlers receive these wrapped in `FlowContext`.

use serde::Deserialize;

use crate::model::{Account, BookingRequest, Order, ShareItem, SustainabilityReport, User};
use crate::services::payment_mock::PaymentConfirmation;
use crate::state::HubState;
use crate::tracking::TrackingStatus;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
  pub name: String,
  pub email: String,
  #[serde(default)]
  pub contact_no: String,
  #[serde(default)]
  pub address: String,
  pub password: String,
}

#[derive(Clone)]
pub struct SignupCtxData {
  pub state: HubState,
  pub form: SignupForm,
  pub created_user: Option<User>,
}

#[derive(Clone)]
pub struct SigninCtxData {
  pub state: HubState,
  pub email: String,
  pub password: String,
  pub account: Option<Account>,
  pub user: Option<User>,
}

#[derive(Clone)]
pub struct BookingCtxData {
  pub state: HubState,
  pub request: BookingRequest,
  pub item: Option<ShareItem>,
  pub total_amount: u64,
  pub payment: Option<PaymentConfirmation>,
  pub order: Option<Order>,
  /// Set once `claim_item` has marked the item rented.
  pub item_claimed: bool,
  pub report: Option<SustainabilityReport>,
}

#[derive(Clone)]
pub struct StatusUpdateCtxData {
  pub state: HubState,
  pub order_id: String,
  pub target: TrackingStatus,
  pub current: Option<Order>,
  pub updated: Option<Order>,
}

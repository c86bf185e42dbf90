// core/src/hub.rs

//! `Hub`: the facade the application layer talks to.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::error::{HubError, HubResult};
use crate::model::{BookingReceipt, BookingRequest, NewItem, Order, ShareItem, User};
use crate::pipelines::contexts::{BookingCtxData, SigninCtxData, SignupCtxData, SignupForm, StatusUpdateCtxData};
use crate::pipelines::register_all_pipelines;
use crate::services::{assistant, Assistant, Catalog, CommunityFeed, GlobalStats, Impact, LoanBook, OrderBook, Sessions};
use crate::settings::HubSettings;
use crate::state::HubState;
use crate::store::Store;
use crate::tracking::TrackingStatus;
use crate::workflow::{FlowContext, FlowOutcome, FlowRegistry};

#[derive(Clone)]
pub struct Hub {
  state: HubState,
  flows: Arc<FlowRegistry>,
}

impl Hub {
  pub fn new(store: Store, settings: HubSettings) -> HubResult<Self> {
    Self::from_state(HubState::new(store, settings))
  }

  pub fn from_state(state: HubState) -> HubResult<Self> {
    let flows = FlowRegistry::new();
    register_all_pipelines(&flows)?;
    info!(
      transition_policy = ?state.settings.transition_policy,
      availability_rule = ?state.settings.availability_rule,
      "Hub ready."
    );
    Ok(Self {
      state,
      flows: Arc::new(flows),
    })
  }

  /// A hub over a fresh in-memory store with default settings.
  pub fn in_memory() -> HubResult<Self> {
    Self::new(Store::in_memory(), HubSettings::default())
  }

  pub fn with_assistant(mut self, assistant: Arc<dyn Assistant>) -> Self {
    self.state = self.state.with_assistant(assistant);
    self
  }

  pub fn state(&self) -> &HubState {
    &self.state
  }

  pub fn settings(&self) -> &HubSettings {
    &self.state.settings
  }

  pub fn catalog(&self) -> &Catalog {
    &self.state.catalog
  }

  pub fn orders(&self) -> &OrderBook {
    &self.state.orders
  }

  pub fn sessions(&self) -> &Sessions {
    &self.state.sessions
  }

  pub fn loans(&self) -> &LoanBook {
    &self.state.loans
  }

  pub fn community(&self) -> &CommunityFeed {
    &self.state.community
  }

  async fn run_flow<T: Send + Sync + 'static>(&self, ctx: &FlowContext<T>, flow: &str) -> HubResult<()> {
    match self.flows.run(ctx.clone()).await? {
      FlowOutcome::Completed => Ok(()),
      FlowOutcome::Stopped => Err(HubError::Internal(format!("The {flow} flow stopped before completing."))),
    }
  }

  /// Creates an account and signs the new member in.
  #[instrument(name = "Hub::signup", skip_all, fields(email = %form.email), err(Display))]
  pub async fn signup(&self, form: SignupForm) -> HubResult<User> {
    let ctx = FlowContext::new(SignupCtxData {
      state: self.state.clone(),
      form,
      created_user: None,
    });
    self.run_flow(&ctx, "signup").await?;
    let user = ctx.read().created_user.clone();
    user.ok_or_else(|| HubError::Internal("Signup completed without a user.".to_string()))
  }

  #[instrument(name = "Hub::signin", skip_all, fields(email = %email), err(Display))]
  pub async fn signin(&self, email: &str, password: &str) -> HubResult<User> {
    let ctx = FlowContext::new(SigninCtxData {
      state: self.state.clone(),
      email: email.to_string(),
      password: password.to_string(),
      account: None,
      user: None,
    });
    self.run_flow(&ctx, "signin").await?;
    let user = ctx.read().user.clone();
    user.ok_or_else(|| HubError::Internal("Signin completed without a user.".to_string()))
  }

  pub fn sign_out(&self) -> HubResult<bool> {
    self.state.sessions.sign_out()
  }

  pub fn current_user(&self) -> HubResult<Option<User>> {
    self.state.sessions.current()
  }

  /// Lists an item owned by the signed-in member.
  pub fn list_item(&self, new_item: NewItem) -> HubResult<ShareItem> {
    let owner = self
      .current_user()?
      .ok_or_else(|| HubError::Auth("Sign in to list an item.".to_string()))?;
    self.state.catalog.list_item(&owner, new_item)
  }

  /// Books an item: pays for it and places the delivery order.
  #[instrument(name = "Hub::book", skip_all, fields(item_id = %request.item_id, buyer_id = %request.buyer_id), err(Display))]
  pub async fn book(&self, request: BookingRequest) -> HubResult<BookingReceipt> {
    let ctx = FlowContext::new(BookingCtxData {
      state: self.state.clone(),
      request,
      item: None,
      total_amount: 0,
      payment: None,
      order: None,
      item_claimed: false,
      report: None,
    });
    if let Err(err) = self.run_flow(&ctx, "booking").await {
      self.release_claim(&ctx);
      return Err(err);
    }

    let guard = ctx.read();
    let order = guard
      .order
      .clone()
      .ok_or_else(|| HubError::Internal("Booking completed without an order.".to_string()))?;
    let payment_reference = guard
      .payment
      .as_ref()
      .map(|p| p.reference.clone())
      .unwrap_or_default();
    Ok(BookingReceipt {
      order,
      total_amount: guard.total_amount,
      payment_reference,
      report: guard.report.clone(),
    })
  }

  fn release_claim(&self, ctx: &FlowContext<BookingCtxData>) {
    let (claimed, item_id) = {
      let guard = ctx.read();
      (guard.item_claimed, guard.request.item_id.clone())
    };
    if !claimed {
      return;
    }
    match self.state.catalog.release(&item_id) {
      Ok(_) => info!(%item_id, "Booking failed; item released."),
      Err(err) => warn!(%item_id, error = %err, "Booking failed and the item could not be released."),
    }
  }

  /// Overwrites an order's tracking status, subject to the configured policy.
  #[instrument(name = "Hub::update_order_status", skip(self, status), fields(status = %status), err(Display))]
  pub async fn update_order_status(&self, order_id: &str, status: TrackingStatus) -> HubResult<Order> {
    let ctx = FlowContext::new(StatusUpdateCtxData {
      state: self.state.clone(),
      order_id: order_id.to_string(),
      target: status,
      current: None,
      updated: None,
    });
    self.run_flow(&ctx, "status update").await?;
    let updated = ctx.read().updated.clone();
    updated.ok_or_else(|| HubError::Internal("Status update completed without an order.".to_string()))
  }

  pub fn available_deliveries(&self) -> HubResult<Vec<Order>> {
    self
      .state
      .orders
      .available_deliveries(self.state.settings.availability_rule)
  }

  pub fn global_stats(&self) -> HubResult<GlobalStats> {
    let items = self.state.catalog.all()?;
    Ok(GlobalStats::from_items(&items, self.state.settings.co2_per_share_kg))
  }

  pub fn impact_for(&self, owner_id: &str) -> HubResult<Impact> {
    let items = self.state.catalog.for_owner(owner_id)?;
    Ok(Impact::from_items(&items, self.state.settings.co2_per_share_kg))
  }

  pub async fn ask_assistant(&self, message: &str) -> String {
    assistant::ask(self.state.assistant.as_ref(), message).await
  }
}

// core/src/state.rs

use std::sync::Arc;

use crate::services::{Assistant, Catalog, CommunityFeed, LoanBook, OrderBook, ScriptedAssistant, Sessions};
use crate::settings::HubSettings;
use crate::store::Store;

/// Everything a flow handler may need, cheap to clone into each context.
#[derive(Clone)]
pub struct HubState {
  pub store: Store,
  pub settings: Arc<HubSettings>,
  pub catalog: Catalog,
  pub orders: OrderBook,
  pub sessions: Sessions,
  pub loans: LoanBook,
  pub community: CommunityFeed,
  pub assistant: Arc<dyn Assistant>,
}

impl HubState {
  pub fn new(store: Store, settings: HubSettings) -> Self {
    Self {
      catalog: Catalog::new(store.clone()),
      orders: OrderBook::new(store.clone()),
      sessions: Sessions::new(store.clone()),
      store,
      settings: Arc::new(settings),
      loans: LoanBook::new(),
      community: CommunityFeed::new(),
      assistant: Arc::new(ScriptedAssistant),
    }
  }

  pub fn with_assistant(mut self, assistant: Arc<dyn Assistant>) -> Self {
    self.assistant = assistant;
    self
  }
}

impl std::fmt::Debug for HubState {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("HubState")
      .field("store", &self.store)
      .field("settings", &self.settings)
      .finish_non_exhaustive()
  }
}

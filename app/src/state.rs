// app/src/state.rs
use std::sync::Arc;

use sharehub::Hub;

use crate::config::AppConfig;
use crate::errors::Result;

#[derive(Clone)]
pub struct AppState {
  pub hub: Hub,
  pub config: Arc<AppConfig>,
}

impl AppState {
  pub fn from_config(config: AppConfig) -> Result<Self> {
    let hub = Hub::new(config.open_store()?, config.hub_settings())?;
    Ok(Self {
      hub,
      config: Arc::new(config),
    })
  }
}

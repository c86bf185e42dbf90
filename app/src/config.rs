// app/src/config.rs

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use dotenvy::dotenv;
use sharehub::{AvailabilityRule, HubSettings, Store, TransitionPolicy};

use crate::errors::{AppError, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  /// Directory for the JSON store. `None` keeps everything in memory.
  pub data_dir: Option<PathBuf>,
  pub transition_policy: TransitionPolicy,
  pub delivery_filter: AvailabilityRule,
  pub payment_latency: Duration,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      server_host: "127.0.0.1".to_string(),
      server_port: 8080,
      data_dir: None,
      transition_policy: TransitionPolicy::default(),
      delivery_filter: AvailabilityRule::default(),
      payment_latency: Duration::ZERO,
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from any variable source; unset variables take their defaults.
  pub fn from_lookup(get_env: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let defaults = Self::default();

    let server_host = get_env("SERVER_HOST").unwrap_or(defaults.server_host);
    let server_port = match get_env("SERVER_PORT") {
      Some(raw) => raw
        .parse::<u16>()
        .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {e}")))?,
      None => defaults.server_port,
    };
    let data_dir = get_env("SHAREHUB_DATA_DIR")
      .filter(|dir| !dir.trim().is_empty())
      .map(PathBuf::from);
    let transition_policy = match get_env("SHAREHUB_TRANSITION_POLICY") {
      Some(raw) => raw.parse::<TransitionPolicy>().map_err(|e| AppError::Config(format!("SHAREHUB_TRANSITION_POLICY: {e}")))?,
      None => defaults.transition_policy,
    };
    let delivery_filter = match get_env("SHAREHUB_DELIVERY_FILTER") {
      Some(raw) => raw.parse::<AvailabilityRule>().map_err(|e| AppError::Config(format!("SHAREHUB_DELIVERY_FILTER: {e}")))?,
      None => defaults.delivery_filter,
    };
    let payment_latency = match get_env("SHAREHUB_PAYMENT_LATENCY_MS") {
      Some(raw) => Duration::from_millis(
        raw
          .parse::<u64>()
          .map_err(|e| AppError::Config(format!("Invalid SHAREHUB_PAYMENT_LATENCY_MS: {e}")))?,
      ),
      None => defaults.payment_latency,
    };

    tracing::info!("Application configuration loaded successfully.");
    Ok(Self {
      server_host,
      server_port,
      data_dir,
      transition_policy,
      delivery_filter,
      payment_latency,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }

  pub fn hub_settings(&self) -> HubSettings {
    HubSettings::default()
      .with_transition_policy(self.transition_policy)
      .with_availability_rule(self.delivery_filter)
      .with_payment_latency(self.payment_latency)
  }

  pub fn open_store(&self) -> Result<Store> {
    match &self.data_dir {
      Some(dir) => {
        tracing::info!(data_dir = %dir.display(), "Using file-backed store.");
        Ok(Store::open_dir(dir)?)
      }
      None => {
        tracing::warn!("SHAREHUB_DATA_DIR not set; state will be lost on restart.");
        Ok(Store::in_memory())
      }
    }
  }
}

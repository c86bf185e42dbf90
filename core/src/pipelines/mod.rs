// core/src/pipelines/mod.rs

//! The multi-step operations, each registered as a `Workflow` keyed by its context type.

pub mod booking_pipeline;
pub mod contexts;
pub mod signin_pipeline;
pub mod signup_pipeline;
pub mod status_pipeline;

use tracing::info;

use crate::error::HubResult;
use crate::workflow::FlowRegistry;

pub fn register_all_pipelines(registry: &FlowRegistry) -> HubResult<()> {
  signup_pipeline::register_signup_pipeline(registry)?;
  signin_pipeline::register_signin_pipeline(registry)?;
  booking_pipeline::register_booking_pipeline(registry)?;
  status_pipeline::register_status_pipeline(registry)?;
  info!("All hub pipelines registered.");
  Ok(())
}

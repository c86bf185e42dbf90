// core/src/pipelines/status_pipeline.rs

use tracing::{event, info, Level};

use crate::error::HubError;
use crate::pipelines::contexts::StatusUpdateCtxData;
use crate::workflow::{FlowContext, FlowRegistry, StepControl, Workflow};
use crate::HubResult;

/// Registers the operator status-update workflow.
pub fn register_status_pipeline(registry: &FlowRegistry) -> HubResult<()> {
  let mut status = Workflow::<StatusUpdateCtxData>::new(
    "status_update",
    &[
      ("load_order", false),
      ("persist_status", false),
    ],
  );

  status.on("load_order", |ctx: FlowContext<StatusUpdateCtxData>| async move {
    let (orders, order_id) = {
      let guard = ctx.read();
      (guard.state.orders.clone(), guard.order_id.clone())
    };
    let order = orders.get(&order_id)?;
    ctx.write().current = Some(order);
    Ok::<_, HubError>(StepControl::Continue)
  })?;

  // The policy check and the write share one store lock inside `set_status`.
  // Same status again is accepted and rewritten, matching a repeated button press.
  status.on("persist_status", |ctx: FlowContext<StatusUpdateCtxData>| async move {
    let (orders, order_id, target, policy) = {
      let guard = ctx.read();
      if let Some(current) = guard.current.as_ref() {
        event!(Level::DEBUG, from = %current.status, to = %guard.target, "Applying transition.");
      }
      (
        guard.state.orders.clone(),
        guard.order_id.clone(),
        guard.target,
        guard.state.settings.transition_policy,
      )
    };
    let updated = orders.set_status(&order_id, target, policy)?;
    info!(%order_id, status = %updated.status, "Order status updated.");
    ctx.write().updated = Some(updated);
    Ok::<_, HubError>(StepControl::Continue)
  })?;

  registry.register(status);
  info!("Status update pipeline registered.");
  Ok(())
}

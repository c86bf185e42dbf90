// core/src/workflow/execution.rs

//! `Workflow::run()`: drives the steps and their handlers in order.

use tracing::{event, info_span, instrument, Instrument, Level};

use super::definition::{Handler, Workflow};
use super::{FlowContext, FlowOutcome, StepControl};
use crate::error::{HubError, HubResult};

enum PhaseResult {
  Continue,
  Stopped,
  Failed(HubError),
}

impl<T: 'static + Send + Sync> Workflow<T> {
  /// Executes the workflow against `ctx`.
  ///
  /// Required steps without handlers fail with `HubError::HandlerMissing`.
  /// An error from an optional step is logged and the run moves on to the next step.
  #[instrument(
    name = "Workflow::run",
    skip_all,
    fields(workflow = %self.name, num_steps = self.steps.len()),
    err(Display)
  )]
  pub async fn run(&self, ctx: FlowContext<T>) -> HubResult<FlowOutcome> {
    event!(Level::DEBUG, "Workflow execution starting.");

    for (step_idx, step_def) in self.steps.iter().enumerate() {
      let step_name = step_def.name.as_str();
      let step_span = info_span!(
        "workflow_step",
        step_name = step_name,
        step_index = step_idx,
        optional = step_def.optional
      );

      if let Some(predicate) = &step_def.skip_when {
        if predicate(ctx.clone()) {
          event!(parent: &step_span, Level::INFO, "Step skipped by its skip predicate.");
          continue;
        }
      }

      if !self.has_handlers(step_name) {
        if step_def.optional {
          event!(parent: &step_span, Level::DEBUG, "Optional step has no handlers, skipping.");
          continue;
        }
        event!(parent: &step_span, Level::ERROR, "Required step has no handlers.");
        return Err(HubError::HandlerMissing {
          step_name: step_def.name.clone(),
        });
      }

      let phases = [
        ("before", self.before.get(step_name)),
        ("on", self.on.get(step_name)),
        ("after", self.after.get(step_name)),
      ];

      let mut step_result = PhaseResult::Continue;
      for (phase_name, handlers) in phases {
        let Some(handlers) = handlers else { continue };
        step_result = run_phase(handlers, &ctx, phase_name)
          .instrument(step_span.clone())
          .await;
        if !matches!(step_result, PhaseResult::Continue) {
          break;
        }
      }

      match step_result {
        PhaseResult::Continue => {
          event!(parent: &step_span, Level::DEBUG, "Step finished.");
        }
        PhaseResult::Stopped => {
          event!(parent: &step_span, Level::INFO, "Workflow stopped by a handler.");
          return Ok(FlowOutcome::Stopped);
        }
        PhaseResult::Failed(err) if step_def.optional => {
          event!(parent: &step_span, Level::WARN, error = %err, "Optional step failed, continuing.");
        }
        PhaseResult::Failed(err) => {
          event!(parent: &step_span, Level::ERROR, error = %err, "Step failed.");
          return Err(err);
        }
      }
    }

    event!(Level::DEBUG, "Workflow execution completed.");
    Ok(FlowOutcome::Completed)
  }
}

async fn run_phase<T: 'static + Send + Sync>(
  handlers: &[Handler<T>],
  ctx: &FlowContext<T>,
  phase_name: &'static str,
) -> PhaseResult {
  for (handler_idx, handler_fn) in handlers.iter().enumerate() {
    let handler_span = tracing::debug_span!("handler", phase = phase_name, handler_index = handler_idx);
    match handler_fn(ctx.clone()).instrument(handler_span).await {
      Ok(StepControl::Continue) => {}
      Ok(StepControl::Stop) => return PhaseResult::Stopped,
      Err(e) => return PhaseResult::Failed(e),
    }
  }
  PhaseResult::Continue
}

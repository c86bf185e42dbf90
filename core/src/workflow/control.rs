// core/src/workflow/control.rs

//! Signals for controlling workflow flow and the outcome of a workflow run.

/// Signal from a handler indicating whether the workflow should continue or stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepControl {
  /// Continue with the remaining handlers of this step and the following steps.
  Continue,
  /// Halt the workflow. No further handlers run.
  Stop,
}

/// Outcome of a full workflow execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
  /// Every step ran (or was skipped) to the end.
  Completed,
  /// A handler returned `StepControl::Stop`.
  Stopped,
}

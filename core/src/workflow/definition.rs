// core/src/workflow/definition.rs

//! The `Workflow<T>` struct and its construction and handler-registration methods.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::{event, Level};

use super::{FlowContext, StepControl, StepDef};
use crate::error::{HubError, HubResult};

/// Boxed asynchronous handler attached to one phase of a step.
pub type Handler<T> = Box<
  dyn Fn(FlowContext<T>) -> Pin<Box<dyn Future<Output = HubResult<StepControl>> + Send>> + Send + Sync,
>;

/// An ordered sequence of named steps operating on a `FlowContext<T>`.
pub struct Workflow<T: 'static + Send + Sync> {
  pub(crate) name: String,
  pub(crate) steps: Vec<StepDef<T>>,
  pub(crate) before: HashMap<String, Vec<Handler<T>>>,
  pub(crate) on: HashMap<String, Vec<Handler<T>>>,
  pub(crate) after: HashMap<String, Vec<Handler<T>>>,
}

#[derive(Clone, Copy)]
enum Phase {
  Before,
  On,
  After,
}

impl<T: 'static + Send + Sync> Workflow<T> {
  /// Creates a workflow from `(step_name, optional)` pairs, in execution order.
  pub fn new(name: impl Into<String>, step_defs: &[(&str, bool)]) -> Self {
    let steps = step_defs
      .iter()
      .map(|(name, optional)| StepDef {
        name: (*name).to_string(),
        optional: *optional,
        skip_when: None,
      })
      .collect();

    Self {
      name: name.into(),
      steps,
      before: HashMap::new(),
      on: HashMap::new(),
      after: HashMap::new(),
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn step_names(&self) -> Vec<&str> {
    self.steps.iter().map(|s| s.name.as_str()).collect()
  }

  fn ensure_step_exists(&self, step_name: &str) -> HubResult<()> {
    if self.steps.iter().any(|s| s.name == step_name) {
      Ok(())
    } else {
      Err(HubError::StepNotFound {
        step_name: step_name.to_string(),
      })
    }
  }

  /// Skips `step_name` whenever `predicate` answers `true` for the current context.
  pub fn skip_when(
    &mut self,
    step_name: &str,
    predicate: impl Fn(FlowContext<T>) -> bool + Send + Sync + 'static,
  ) -> HubResult<()> {
    let step = self
      .steps
      .iter_mut()
      .find(|s| s.name == step_name)
      .ok_or_else(|| HubError::StepNotFound {
        step_name: step_name.to_string(),
      })?;
    step.skip_when = Some(Arc::new(predicate));
    Ok(())
  }

  fn push_handler<F>(
    &mut self,
    phase: Phase,
    step_name: &str,
    handler_fn: impl Fn(FlowContext<T>) -> F + Send + Sync + 'static,
  ) -> HubResult<()>
  where
    F: Future<Output = HubResult<StepControl>> + Send + 'static,
  {
    self.ensure_step_exists(step_name)?;
    let handler: Handler<T> = Box::new(move |ctx| Box::pin(handler_fn(ctx)));
    let slot = match phase {
      Phase::Before => &mut self.before,
      Phase::On => &mut self.on,
      Phase::After => &mut self.after,
    };
    slot.entry(step_name.to_string()).or_default().push(handler);
    event!(Level::TRACE, workflow = %self.name, step = step_name, "Handler registered.");
    Ok(())
  }

  /// Registers a handler that runs before the step's `on` handlers.
  pub fn before<F>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(FlowContext<T>) -> F + Send + Sync + 'static,
  ) -> HubResult<()>
  where
    F: Future<Output = HubResult<StepControl>> + Send + 'static,
  {
    self.push_handler(Phase::Before, step_name, handler_fn)
  }

  /// Registers the main handler of a step.
  pub fn on<F>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(FlowContext<T>) -> F + Send + Sync + 'static,
  ) -> HubResult<()>
  where
    F: Future<Output = HubResult<StepControl>> + Send + 'static,
  {
    self.push_handler(Phase::On, step_name, handler_fn)
  }

  pub fn after<F>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(FlowContext<T>) -> F + Send + Sync + 'static,
  ) -> HubResult<()>
  where
    F: Future<Output = HubResult<StepControl>> + Send + 'static,
  {
    self.push_handler(Phase::After, step_name, handler_fn)
  }

  pub(crate) fn has_handlers(&self, step_name: &str) -> bool {
    [&self.before, &self.on, &self.after]
      .iter()
      .any(|map| map.get(step_name).is_some_and(|v| !v.is_empty()))
  }
}

// core/src/workflow/step.rs

use super::FlowContext;

/// Predicate evaluated before a step runs. Returning `true` skips the step.
pub type SkipPredicate<T> = std::sync::Arc<dyn Fn(FlowContext<T>) -> bool + Send + Sync + 'static>;

/// Definition of a workflow step: its name, optionality and skip predicate.
///
/// An optional step may have no handlers, and a failure inside one of its
/// handlers is logged instead of aborting the run.
#[derive(Clone)]
pub struct StepDef<T: 'static + Send + Sync> {
  pub name: String,
  pub optional: bool,
  pub skip_when: Option<SkipPredicate<T>>,
}

impl<T: 'static + Send + Sync> std::fmt::Debug for StepDef<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("StepDef")
      .field("name", &self.name)
      .field("optional", &self.optional)
      .field("skip_when_present", &self.skip_when.is_some())
      .finish()
  }
}

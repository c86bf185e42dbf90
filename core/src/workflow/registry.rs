// core/src/workflow/registry.rs

//! `FlowRegistry`: a type-keyed registry of workflows. Each context type `T`
//! has at most one registered `Workflow<T>`.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{event, instrument, Level};

use super::{FlowContext, FlowOutcome, Workflow};
use crate::error::{HubError, HubResult};

/// Type-erased runner so workflows over different context types share one map.
#[async_trait]
trait ErasedWorkflow: Send + Sync {
  fn name(&self) -> &str;

  async fn run_erased(&self, ctx: Box<dyn Any + Send>) -> HubResult<FlowOutcome>;
}

#[async_trait]
impl<T: 'static + Send + Sync> ErasedWorkflow for Workflow<T> {
  fn name(&self) -> &str {
    &self.name
  }

  async fn run_erased(&self, ctx: Box<dyn Any + Send>) -> HubResult<FlowOutcome> {
    let typed = ctx.downcast::<FlowContext<T>>().map_err(|_| HubError::TypeMismatch {
      expected_type: std::any::type_name::<FlowContext<T>>().to_string(),
    })?;
    self.run(*typed).await
  }
}

#[derive(Default)]
pub struct FlowRegistry {
  flows: RwLock<HashMap<TypeId, Arc<dyn ErasedWorkflow>>>,
}

impl FlowRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers `workflow` for context type `T`, replacing any previous one.
  pub fn register<T: 'static + Send + Sync>(&self, workflow: Workflow<T>) {
    event!(
      Level::DEBUG,
      workflow = %workflow.name,
      context_type = %std::any::type_name::<T>(),
      "Registering workflow."
    );
    self.flows.write().insert(TypeId::of::<T>(), Arc::new(workflow));
  }

  pub fn contains<T: 'static + Send + Sync>(&self) -> bool {
    self.flows.read().contains_key(&TypeId::of::<T>())
  }

  /// Runs the workflow registered for `T` against `ctx`.
  #[instrument(
    name = "FlowRegistry::run",
    skip_all,
    fields(context_type = %std::any::type_name::<T>()),
    err(Display)
  )]
  pub async fn run<T: 'static + Send + Sync>(&self, ctx: FlowContext<T>) -> HubResult<FlowOutcome> {
    // Clone the Arc out so the registry lock is released before awaiting.
    let runner = self.flows.read().get(&TypeId::of::<T>()).cloned();
    let runner = runner.ok_or_else(|| {
      let type_name = std::any::type_name::<T>();
      event!(Level::ERROR, "No workflow registered for context type {}.", type_name);
      HubError::Configuration(format!("No workflow registered for context type {type_name}"))
    })?;
    event!(Level::DEBUG, workflow = runner.name(), "Dispatching workflow.");
    runner.run_erased(Box::new(ctx)).await
  }
}

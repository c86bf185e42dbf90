// core/src/workflow/mod.rs

//! A small asynchronous step engine.
//!
//! A `Workflow<T>` is an ordered list of named steps. Each step carries `before`, `on`
//! and `after` handler lists that receive a shared `FlowContext<T>` and answer with a
//! `StepControl`. Workflows are registered in a `FlowRegistry` keyed by `T`.

pub mod context;
pub mod control;
pub mod definition;
pub mod execution;
pub mod registry;
pub mod step;

pub use context::FlowContext;
pub use control::{FlowOutcome, StepControl};
pub use definition::{Handler, Workflow};
pub use registry::FlowRegistry;
pub use step::{SkipPredicate, StepDef};

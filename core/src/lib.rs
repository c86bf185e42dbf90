// core/src/lib.rs

//! ShareHub: a peer-to-peer item sharing hub.
//!
//! Members list household items for lending, book each other's items, and follow
//! the resulting delivery orders through a fixed tracking pipeline. The crate provides:
//!  - A keyed JSON persistence store with pluggable backends (memory, directory).
//!  - The order tracking state machine and the delivery availability filter.
//!  - Services for the catalog, orders, sessions, loans, the community feed and
//!    the chat assistant boundary.
//!  - A small asynchronous step engine (`Workflow`) on which the multi-step
//!    operations (signup, signin, booking, status updates) are built.
//!  - The `Hub` facade tying the above together.

pub mod deliveries;
pub mod error;
pub mod hub;
pub mod model;
pub mod pipelines;
pub mod services;
pub mod settings;
pub mod state;
pub mod store;
pub mod tracking;
pub mod workflow;

// --- Re-exports for the Public API ---

pub use crate::error::{HubError, HubResult};
pub use crate::hub::Hub;
pub use crate::pipelines::contexts::SignupForm;
pub use crate::settings::HubSettings;
pub use crate::state::HubState;

pub use crate::deliveries::AvailabilityRule;
pub use crate::tracking::{TrackingStatus, TransitionPolicy};

pub use crate::store::{FileBackend, MemoryBackend, Record, StorageBackend, Store};

pub use crate::workflow::{FlowContext, FlowOutcome, FlowRegistry, StepControl, Workflow};

/*
    Request lifecycle:
    1. The caller builds a `Hub` over a `Store` (memory or directory backend).
    2. `Hub::new` registers one `Workflow` per multi-step operation, keyed by its context type.
    3. An operation such as `Hub::book` wraps a fresh context in `FlowContext`, runs the
       registered workflow and reads the outcome back out of the context.
    4. Single-step reads and writes (catalog listings, deliveries, stats) go straight
       through the services, which read and write whole collections via the `Store`.
*/

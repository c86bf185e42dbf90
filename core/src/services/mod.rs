// core/src/services/mod.rs

//! Domain services. Persistent ones (`Catalog`, `OrderBook`, `Sessions`) are thin
//! handles over the shared `Store`; `LoanBook` and `CommunityFeed` live in memory.

pub mod assistant;
pub mod auth_service;
pub mod catalog;
pub mod community;
pub mod loans;
pub mod orders;
pub mod payment_mock;
pub mod sessions;
pub mod stats;

pub use assistant::{Assistant, ScriptedAssistant};
pub use catalog::Catalog;
pub use community::CommunityFeed;
pub use loans::LoanBook;
pub use orders::OrderBook;
pub use sessions::Sessions;
pub use stats::{GlobalStats, Impact};

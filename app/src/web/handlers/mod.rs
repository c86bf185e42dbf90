// app/src/web/handlers/mod.rs

pub mod assistant_handlers;
pub mod auth_handlers;
pub mod booking_handlers;
pub mod community_handlers;
pub mod item_handlers;
pub mod loan_handlers;
pub mod order_handlers;
pub mod stats_handlers;

// core/src/model/mod.rs

//! Entities of the hub and their seed data.

pub mod badge;
pub mod booking;
pub mod item;
pub mod loan;
pub mod order;
pub mod post;
pub mod user;

pub use badge::{all_badges, Badge, BadgeDef, BadgeName, BADGES};
pub use booking::{BookingDetails, BookingReceipt, BookingRequest, PaymentMethod, SustainabilityReport};
pub use item::{Category, ItemStatus, NewItem, ShareItem};
pub use loan::{Loan, LoanStatus};
pub use order::Order;
pub use post::CommunityPost;
pub use user::{Account, Role, User};

/// Fresh opaque identifier for a newly created record.
pub(crate) fn new_id() -> String {
  uuid::Uuid::new_v4().simple().to_string()
}

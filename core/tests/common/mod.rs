// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use std::future::Future;
use std::pin::Pin;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use sharehub::model::{BookingDetails, BookingRequest, PaymentMethod};
use sharehub::{FlowContext, Hub, HubError, HubResult, SignupForm, StepControl};
use tracing::Level;

// --- Workflow test context ---
#[derive(Clone, Debug, Default)]
pub struct TestContext {
  pub counter: i32,
  pub steps_executed: Vec<String>,
  pub should_stop_at: Option<String>,
}

pub type BoxedHandlerFuture = Pin<Box<dyn Future<Output = HubResult<StepControl>> + Send>>;

/// Records its step name and honours `should_stop_at`.
pub fn recording_handler(
  step_name: &'static str,
) -> impl Fn(FlowContext<TestContext>) -> BoxedHandlerFuture + Send + Sync + 'static {
  move |ctx: FlowContext<TestContext>| -> BoxedHandlerFuture {
    Box::pin(async move {
      let mut guard = ctx.write();
      guard.counter += 1;
      guard.steps_executed.push(step_name.to_string());
      tracing::debug!(target: "test_handlers", step = step_name, counter = guard.counter, "executed");
      if guard.should_stop_at.as_deref() == Some(step_name) {
        return Ok(StepControl::Stop);
      }
      Ok::<StepControl, HubError>(StepControl::Continue)
    })
  }
}

pub fn failing_handler(
  step_name: &'static str,
  message: &'static str,
) -> impl Fn(FlowContext<TestContext>) -> BoxedHandlerFuture + Send + Sync + 'static {
  move |ctx: FlowContext<TestContext>| -> BoxedHandlerFuture {
    Box::pin(async move {
      ctx.write().steps_executed.push(step_name.to_string());
      Err::<StepControl, HubError>(HubError::Validation(message.to_string()))
    })
  }
}

// --- Hub fixtures ---
pub fn signup_form(name: &str, email: &str, password: &str) -> SignupForm {
  SignupForm {
    name: name.to_string(),
    email: email.to_string(),
    contact_no: "9876543210".to_string(),
    address: "Sector 15, Rohini, Delhi".to_string(),
    password: password.to_string(),
  }
}

pub fn booking_request(item_id: &str, buyer_id: &str, quantity: u32) -> BookingRequest {
  BookingRequest {
    item_id: item_id.to_string(),
    buyer_id: buyer_id.to_string(),
    delivery_address: "KV Narela, Delhi".to_string(),
    details: BookingDetails {
      quantity,
      pickup_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
      lending_time: "18:30".to_string(),
    },
    payment_method: PaymentMethod::Upi,
  }
}

pub fn memory_hub() -> Hub {
  Hub::in_memory().expect("hub should build")
}

// --- Helper for Tracing Setup ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// core/src/services/assistant.rs

//! The chat assistant boundary.
//!
//! The text generator behind the assistant is an external collaborator. It is
//! modelled as the `Assistant` trait; `ask` turns its failures into the fixed
//! apology messages the chat window shows.

use async_trait::async_trait;
use tracing::{error, instrument};

pub const GREETING: &str = "Hi! I'm your ShareHub Assistant. How can I help you save the planet today?";
pub const EMPTY_REPLY: &str = "I'm sorry, I couldn't process that.";
pub const UNAVAILABLE_REPLY: &str = "I am currently having trouble connecting. Please try again later!";

/// Instruction handed to a text-generation backend alongside every message.
pub const SYSTEM_INSTRUCTION: &str = "You are the Community Share Hub AI Bot. Your goal is to help users understand peer-to-peer lending, sustainable living, and how to use this platform. Be friendly, concise, and encourage eco-friendly habits. If users ask about CO2 savings, explain that sharing reduces the need for new manufacturing.";

#[async_trait]
pub trait Assistant: Send + Sync {
  async fn reply(&self, message: &str) -> anyhow::Result<String>;
}

/// Asks `assistant` and always returns something displayable.
#[instrument(name = "assistant::ask", skip(assistant, message), fields(message_len = message.len()))]
pub async fn ask(assistant: &dyn Assistant, message: &str) -> String {
  match assistant.reply(message).await {
    Ok(text) if text.trim().is_empty() => EMPTY_REPLY.to_string(),
    Ok(text) => text,
    Err(err) => {
      error!(error = %err, "Assistant backend failed.");
      UNAVAILABLE_REPLY.to_string()
    }
  }
}

/// Keyword-matched canned answers. Used when no generator is wired in.
#[derive(Debug, Default, Clone)]
pub struct ScriptedAssistant;

impl ScriptedAssistant {
  fn answer_for(message: &str) -> &'static str {
    let lowered = message.to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|w| lowered.contains(w));

    if mentions(&["co2", "carbon", "emission", "planet"]) {
      "Every share avoids manufacturing a new item. We credit about 4.2 kg of CO2 saved for each lending, so borrowing instead of buying really adds up!"
    } else if mentions(&["lend", "list", "add item", "my item"]) {
      "To lend something, open your profile and add the item with a short description and a daily price. Neighbours nearby will see it in Discover."
    } else if mentions(&["borrow", "book", "rent"]) {
      "Pick an item in Discover, choose the quantity, pickup date and time, then pay with ICICI Bank, SBI Bank or UPI. You can follow the delivery live afterwards."
    } else if mentions(&["track", "delivery", "order", "carrier"]) {
      "Your orders move through Order Placed, Picked Up, In Transit, Out for Delivery and Delivered. The tracking page shows where yours is."
    } else if mentions(&["pay", "loan", "due"]) {
      "Pending payments are listed under Flow. Clear them with any of the supported payment options before the due date."
    } else if mentions(&["badge", "community", "post"]) {
      "Share your lending stories in the Community tab. Helpful Neighbour, Best Lender and Zero Waste Hero badges celebrate members who share the most."
    } else if lowered
      .split(|c: char| !c.is_alphanumeric())
      .any(|w| matches!(w, "hi" | "hello" | "hey"))
    {
      GREETING
    } else {
      "ShareHub helps neighbours lend and borrow everyday items. Ask me about lending, borrowing, deliveries or how sharing saves CO2!"
    }
  }
}

#[async_trait]
impl Assistant for ScriptedAssistant {
  async fn reply(&self, message: &str) -> anyhow::Result<String> {
    Ok(Self::answer_for(message).to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  struct Failing;

  #[async_trait]
  impl Assistant for Failing {
    async fn reply(&self, _message: &str) -> anyhow::Result<String> {
      anyhow::bail!("connection refused")
    }
  }

  struct Silent;

  #[async_trait]
  impl Assistant for Silent {
    async fn reply(&self, _message: &str) -> anyhow::Result<String> {
      Ok("   ".to_string())
    }
  }

  #[tokio::test]
  async fn failures_become_apology() {
    assert_eq!(ask(&Failing, "hello").await, UNAVAILABLE_REPLY);
  }

  #[tokio::test]
  async fn blank_reply_becomes_fallback() {
    assert_eq!(ask(&Silent, "hello").await, EMPTY_REPLY);
  }

  #[tokio::test]
  async fn scripted_answers_co2_questions() {
    let reply = ask(&ScriptedAssistant, "How much CO2 do I save?").await;
    assert!(reply.contains("4.2 kg"));
  }
}

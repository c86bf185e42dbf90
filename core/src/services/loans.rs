// core/src/services/loans.rs

use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::error::{HubError, HubResult};
use crate::model::{Loan, LoanStatus, PaymentMethod};

/// Outstanding payments for borrowed items. Kept in process memory only:
/// a restart brings back the seed loan.
#[derive(Debug, Clone)]
pub struct LoanBook {
  loans: Arc<RwLock<Vec<Loan>>>,
}

impl Default for LoanBook {
  fn default() -> Self {
    Self::with_loans(Loan::seed())
  }
}

impl LoanBook {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_loans(loans: Vec<Loan>) -> Self {
    Self {
      loans: Arc::new(RwLock::new(loans)),
    }
  }

  pub fn all(&self) -> Vec<Loan> {
    self.loans.read().clone()
  }

  pub fn pending(&self) -> Vec<Loan> {
    self
      .loans
      .read()
      .iter()
      .filter(|l| l.status == LoanStatus::Pending)
      .cloned()
      .collect()
  }

  /// Marks a loan as paid. Clearing an already cleared loan is a no-op.
  #[instrument(name = "LoanBook::clear", skip(self, method), fields(method = %method), err(Display))]
  pub fn clear(&self, loan_id: &str, method: PaymentMethod) -> HubResult<Loan> {
    let mut loans = self.loans.write();
    let loan = loans
      .iter_mut()
      .find(|l| l.id == loan_id)
      .ok_or_else(|| HubError::NotFound(format!("Loan '{loan_id}'")))?;
    loan.status = LoanStatus::Cleared;
    info!(amount = loan.amount, "Loan cleared.");
    Ok(loan.clone())
  }
}

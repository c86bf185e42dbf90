// app/src/web/handlers/loan_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use sharehub::model::{LoanStatus, PaymentMethod};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ClearLoanPayload {
  pub payment_method: PaymentMethod,
}

#[instrument(name = "handler::list_loans", skip(app_state))]
pub async fn list_loans_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let loans = app_state.hub.loans().all();
  let pending = loans.iter().filter(|l| l.status == LoanStatus::Pending).count();
  Ok(HttpResponse::Ok().json(json!({ "loans": loans, "pending": pending })))
}

#[instrument(name = "handler::clear_loan", skip(app_state, path), fields(loan_id = %path.as_str()))]
pub async fn clear_loan_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  req_payload: web::Json<ClearLoanPayload>,
) -> Result<HttpResponse, AppError> {
  let loan = app_state.hub.loans().clear(&path, req_payload.payment_method)?;
  info!(loan_id = %loan.id, method = %req_payload.payment_method, "Loan cleared.");
  Ok(HttpResponse::Ok().json(loan))
}

// app/src/web/handlers/auth_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use sharehub::SignupForm;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct SigninRequestPayload {
  pub email: String,
  pub password: String,
}

#[instrument(
    name = "handler::signup",
    skip(app_state, req_payload),
    fields(req_email = %req_payload.email)
)]
pub async fn signup_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<SignupForm>,
) -> Result<HttpResponse, AppError> {
  let user = app_state.hub.signup(req_payload.into_inner()).await?;
  info!(user_id = %user.id, "Signup successful.");

  Ok(HttpResponse::Created().json(json!({
      "message": "Account created.",
      "user": user,
  })))
}

#[instrument(
    name = "handler::signin",
    skip(app_state, req_payload),
    fields(req_email = %req_payload.email)
)]
pub async fn signin_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<SigninRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let user = app_state
    .hub
    .signin(&req_payload.email, &req_payload.password)
    .await?;
  info!(user_id = %user.id, "Signin successful.");

  Ok(HttpResponse::Ok().json(json!({
      "message": "Signed in.",
      "user": user,
  })))
}

#[instrument(name = "handler::signout", skip(app_state))]
pub async fn signout_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let had_session = app_state.hub.sign_out()?;
  Ok(HttpResponse::Ok().json(json!({ "signedOut": had_session })))
}

/// The signed-in member, or `null` when nobody is signed in.
#[instrument(name = "handler::session", skip(app_state))]
pub async fn session_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let user = app_state.hub.current_user()?;
  Ok(HttpResponse::Ok().json(json!({ "user": user })))
}

// core/src/pipelines/signin_pipeline.rs

use tracing::{event, info, warn, Level};

use crate::error::HubError;
use crate::model::Account;
use crate::pipelines::contexts::SigninCtxData;
use crate::services::auth_service;
use crate::store::user_key;
use crate::workflow::{FlowContext, FlowRegistry, StepControl, Workflow};
use crate::HubResult;

/// Same message for unknown email and wrong password.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password.";

pub fn register_signin_pipeline(registry: &FlowRegistry) -> HubResult<()> {
  let mut signin = Workflow::<SigninCtxData>::new(
    "signin",
    &[
      ("validate_signin_input", false),
      ("fetch_account", false),
      ("verify_password", false),
      ("open_session", false),
    ],
  );

  signin.on("validate_signin_input", |ctx: FlowContext<SigninCtxData>| async move {
    let mut guard = ctx.write();
    let email = guard.email.trim().to_string();
    if email.is_empty() || guard.password.is_empty() {
      return Err(HubError::Validation("Email and password are required.".to_string()));
    }
    guard.email = email;
    Ok(StepControl::Continue)
  })?;

  signin.on("fetch_account", |ctx: FlowContext<SigninCtxData>| async move {
    let (store, email) = {
      let guard = ctx.read();
      (guard.state.store.clone(), guard.email.clone())
    };
    event!(Level::DEBUG, %email, "Looking up account.");
    match store.get_json::<Account>(&user_key(&email))? {
      Some(account) => {
        ctx.write().account = Some(account);
        Ok(StepControl::Continue)
      }
      None => {
        warn!(%email, "Signin for unknown email.");
        Err(HubError::Auth(INVALID_CREDENTIALS.to_string()))
      }
    }
  })?;

  signin.on("verify_password", |ctx: FlowContext<SigninCtxData>| async move {
    let (account, password) = {
      let guard = ctx.read();
      (guard.account.clone(), guard.password.clone())
    };
    let account = account.ok_or_else(|| HubError::Internal("Account missing before verification.".to_string()))?;
    if !auth_service::verify_password(&account.password_hash, &password)? {
      warn!(user_id = %account.user.id, "Signin with wrong password.");
      return Err(HubError::Auth(INVALID_CREDENTIALS.to_string()));
    }
    ctx.write().user = Some(account.user);
    Ok(StepControl::Continue)
  })?;

  signin.on("open_session", |ctx: FlowContext<SigninCtxData>| async move {
    let (sessions, user) = {
      let guard = ctx.read();
      (guard.state.sessions.clone(), guard.user.clone())
    };
    let user = user.ok_or_else(|| HubError::Internal("Signin reached open_session without a user.".to_string()))?;
    sessions.open(&user)?;
    info!(user_id = %user.id, "Member signed in.");
    Ok::<_, HubError>(StepControl::Continue)
  })?;

  registry.register(signin);
  info!("Sign-in pipeline registered.");
  Ok(())
}

// core/src/pipelines/signup_pipeline.rs

use tracing::{event, info, warn, Level};

use crate::error::HubError;
use crate::model::{new_id, Account, Role, User};
use crate::pipelines::contexts::SignupCtxData;
use crate::services::auth_service;
use crate::store::user_key;
use crate::workflow::{FlowContext, FlowRegistry, StepControl, Workflow};
use crate::HubResult;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Registers the member sign-up workflow.
pub fn register_signup_pipeline(registry: &FlowRegistry) -> HubResult<()> {
  let mut signup = Workflow::<SignupCtxData>::new(
    "signup",
    &[
      ("validate_signup_input", false),
      ("check_existing_account", false),
      ("create_account", false),
      ("open_session", false),
    ],
  );

  // Step 1: Validate input
  signup.on("validate_signup_input", |ctx: FlowContext<SignupCtxData>| async move {
    let form = ctx.read().form.clone();
    event!(Level::DEBUG, email = %form.email, "Validating signup input.");

    if form.name.trim().is_empty() {
      return Err(HubError::Validation("Name is required.".to_string()));
    }
    let email = form.email.trim();
    if email.is_empty() || !email.contains('@') {
      warn!("Invalid email format provided for signup.");
      return Err(HubError::Validation("Valid email is required.".to_string()));
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
      return Err(HubError::Validation(format!(
        "Password must be at least {MIN_PASSWORD_LEN} characters long."
      )));
    }
    // Normalize once so every later step keys the account the same way.
    ctx.write().form.email = email.to_string();
    Ok(StepControl::Continue)
  })?;

  // Step 2: Refuse a second account for the same email
  signup.on("check_existing_account", |ctx: FlowContext<SignupCtxData>| async move {
    let (store, email) = {
      let guard = ctx.read();
      (guard.state.store.clone(), guard.form.email.clone())
    };
    if store.get_json::<Account>(&user_key(&email))?.is_some() {
      warn!(%email, "Signup attempted with an email that already has an account.");
      return Err(HubError::Validation("An account with this email already exists.".to_string()));
    }
    Ok(StepControl::Continue)
  })?;

  // Step 3: Hash the password and store the credential record
  signup.on("create_account", |ctx: FlowContext<SignupCtxData>| async move {
    let (store, form) = {
      let guard = ctx.read();
      (guard.state.store.clone(), guard.form.clone())
    };

    let password_hash = auth_service::hash_password(&form.password)?;
    let user = User {
      id: new_id(),
      name: form.name.trim().to_string(),
      role: Role::for_email(&form.email),
      email: form.email,
      contact_no: form.contact_no,
      address: form.address,
      badges: Vec::new(),
      items_count: 0,
    };
    let account = Account {
      user: user.clone(),
      password_hash,
    };

    // Authoritative duplicate check: the lookup above may race.
    if !store.put_json_if_absent(&user_key(&user.email), &account)? {
      return Err(HubError::Validation("An account with this email already exists.".to_string()));
    }
    info!(user_id = %user.id, role = ?user.role, "Account created.");
    ctx.write().created_user = Some(user);
    Ok(StepControl::Continue)
  })?;

  // Step 4: Sign the new member in
  signup.on("open_session", |ctx: FlowContext<SignupCtxData>| async move {
    let (sessions, user) = {
      let guard = ctx.read();
      (guard.state.sessions.clone(), guard.created_user.clone())
    };
    let user = user.ok_or_else(|| HubError::Internal("Signup reached open_session without a user.".to_string()))?;
    sessions.open(&user)?;
    Ok::<_, HubError>(StepControl::Continue)
  })?;

  registry.register(signup);
  info!("Sign-up pipeline registered.");
  Ok(())
}

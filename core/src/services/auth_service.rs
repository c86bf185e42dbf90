// core/src/services/auth_service.rs

//! Password hashing and verification with Argon2.

use argon2::{
  password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
  Argon2,
};
use tracing::{debug, error, instrument};

use crate::error::{HubError, HubResult};

/// Hashes a plain-text password into an Argon2 PHC string.
///
/// Fails with `HubError::Validation` for an empty password.
#[instrument(name = "auth_service::hash_password", skip(password), err(Display))]
pub fn hash_password(password: &str) -> HubResult<String> {
  if password.is_empty() {
    return Err(HubError::Validation("Password cannot be empty.".to_string()));
  }

  let salt = SaltString::generate(&mut OsRng);
  match Argon2::default().hash_password(password.as_bytes(), &salt) {
    Ok(hash) => {
      debug!("Password hashed.");
      Ok(hash.to_string())
    }
    Err(argon_err) => {
      error!(error = %argon_err, "Argon2 password hashing failed.");
      Err(HubError::Internal(format!("Password hashing failed: {argon_err}")))
    }
  }
}

/// Checks `provided` against a stored PHC string.
///
/// `Ok(false)` means the password is wrong. A stored hash that cannot be
/// parsed is an internal error, not an authentication failure.
#[instrument(
  name = "auth_service::verify_password",
  skip(stored_hash, provided),
  fields(hash_len = stored_hash.len()),
  err(Display)
)]
pub fn verify_password(stored_hash: &str, provided: &str) -> HubResult<bool> {
  if provided.is_empty() {
    return Ok(false);
  }

  let parsed = PasswordHash::new(stored_hash).map_err(|parse_err| {
    error!(error = %parse_err, "Stored password hash is malformed.");
    HubError::Internal(format!("Invalid stored password hash: {parse_err}"))
  })?;

  match Argon2::default().verify_password(provided.as_bytes(), &parsed) {
    Ok(()) => Ok(true),
    Err(argon2::password_hash::Error::Password) => {
      debug!("Password mismatch.");
      Ok(false)
    }
    Err(other) => {
      error!(error = %other, "Argon2 verification failed.");
      Err(HubError::Internal(format!("Password verification failed: {other}")))
    }
  }
}

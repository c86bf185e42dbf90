// core/src/services/sessions.rs

use tracing::info;

use crate::error::HubResult;
use crate::model::User;
use crate::store::{Store, SESSION_KEY};

/// The single "current user" pointer.
#[derive(Debug, Clone)]
pub struct Sessions {
  store: Store,
}

impl Sessions {
  pub fn new(store: Store) -> Self {
    Self { store }
  }

  pub fn current(&self) -> HubResult<Option<User>> {
    self.store.get_json(SESSION_KEY)
  }

  pub fn open(&self, user: &User) -> HubResult<()> {
    self.store.put_json(SESSION_KEY, user)?;
    info!(user_id = %user.id, "Session opened.");
    Ok(())
  }

  /// Clears the session. Returns whether one was open.
  pub fn sign_out(&self) -> HubResult<bool> {
    let was_open = self.store.remove_key(SESSION_KEY)?;
    if was_open {
      info!("Session closed.");
    }
    Ok(was_open)
  }
}

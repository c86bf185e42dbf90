// core/src/model/user.rs

use serde::{Deserialize, Serialize};

use super::Badge;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  #[default]
  User,
  Admin,
}

impl Role {
  /// Admin rights go to any email containing `admin`.
  pub fn for_email(email: &str) -> Self {
    if email.contains("admin") {
      Role::Admin
    } else {
      Role::User
    }
  }
}

/// Public profile of a member. This is also what the session pointer holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
  pub id: String,
  pub name: String,
  pub email: String,
  pub contact_no: String,
  pub address: String,
  #[serde(default)]
  pub badges: Vec<Badge>,
  #[serde(default)]
  pub items_count: u32,
  #[serde(default)]
  pub role: Role,
}

/// Stored credential record under `user_<email>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
  #[serde(flatten)]
  pub user: User,
  /// Argon2 PHC string.
  pub password_hash: String,
}

// tests/auth_tests.rs
mod common;

use common::*;
use serial_test::serial;
use sharehub::model::{Account, Role};
use sharehub::store::user_key;
use sharehub::HubError;

#[tokio::test]
#[serial]
async fn signup_creates_account_and_session() {
  setup_tracing();
  let hub = memory_hub();
  let user = hub
    .signup(signup_form("Asha Rao", "asha@example.com", "lend-more"))
    .await
    .unwrap();

  assert_eq!(user.role, Role::User);
  assert!(user.badges.is_empty());
  assert_eq!(user.items_count, 0);
  assert_eq!(hub.current_user().unwrap(), Some(user.clone()));

  let account: Account = hub
    .state()
    .store
    .get_json(&user_key("asha@example.com"))
    .unwrap()
    .unwrap();
  assert_eq!(account.user, user);
  assert_ne!(account.password_hash, "lend-more");
  assert!(account.password_hash.starts_with("$argon2"));
}

#[tokio::test]
#[serial]
async fn admin_role_comes_from_email() {
  setup_tracing();
  let hub = memory_hub();
  let user = hub
    .signup(signup_form("Ops", "hub.admin@example.com", "secret-1"))
    .await
    .unwrap();
  assert_eq!(user.role, Role::Admin);
}

#[tokio::test]
#[serial]
async fn duplicate_email_is_rejected() {
  setup_tracing();
  let hub = memory_hub();
  hub.signup(signup_form("Asha", "asha@example.com", "first-pass")).await.unwrap();
  let err = hub
    .signup(signup_form("Imposter", "asha@example.com", "second-pass"))
    .await
    .unwrap_err();
  assert!(matches!(err, HubError::Validation(_)));
}

#[tokio::test]
#[serial]
async fn signup_validates_input() {
  setup_tracing();
  let hub = memory_hub();
  for form in [
    signup_form("", "a@b.com", "long-enough"),
    signup_form("Name", "not-an-email", "long-enough"),
    signup_form("Name", "a@b.com", "123"),
  ] {
    let err = hub.signup(form).await.unwrap_err();
    assert!(matches!(err, HubError::Validation(_)), "unexpected: {err}");
  }
  assert_eq!(hub.current_user().unwrap(), None);
}

#[tokio::test]
#[serial]
async fn signin_with_correct_password() {
  setup_tracing();
  let hub = memory_hub();
  let created = hub.signup(signup_form("Asha", "asha@example.com", "lend-more")).await.unwrap();
  hub.sign_out().unwrap();
  assert_eq!(hub.current_user().unwrap(), None);

  let user = hub.signin(" asha@example.com ", "lend-more").await.unwrap();
  assert_eq!(user.id, created.id);
  assert_eq!(hub.current_user().unwrap().map(|u| u.id), Some(created.id));
}

#[tokio::test]
#[serial]
async fn signin_failures_are_auth_errors_without_session() {
  setup_tracing();
  let hub = memory_hub();
  hub.signup(signup_form("Asha", "asha@example.com", "lend-more")).await.unwrap();
  hub.sign_out().unwrap();

  let wrong_password = hub.signin("asha@example.com", "nope-nope").await.unwrap_err();
  let unknown_email = hub.signin("ghost@example.com", "lend-more").await.unwrap_err();
  assert!(matches!(wrong_password, HubError::Auth(_)));
  assert!(matches!(unknown_email, HubError::Auth(_)));
  assert_eq!(wrong_password.to_string(), unknown_email.to_string());
  assert_eq!(hub.current_user().unwrap(), None);
}

#[tokio::test]
#[serial]
async fn sign_out_reports_whether_a_session_existed() {
  setup_tracing();
  let hub = memory_hub();
  assert!(!hub.sign_out().unwrap());
  hub.signup(signup_form("Asha", "asha@example.com", "lend-more")).await.unwrap();
  assert!(hub.sign_out().unwrap());
}

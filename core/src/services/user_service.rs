// core/src/services/user_service.rs

use crate::error::{StorefrontError, StorefrontResult};
use crate::models::{NewUser, Order, User};
use crate::services::auth_service;
use crate::store::Session;
use tracing::{info, instrument, warn};
use validator::Validate;

/// Registers a new user.
///
/// The email is lowercased before the uniqueness checks, so `Foo@Bar.com` and
/// `foo@bar.com` are the same address. A malformed email or an over-long field
/// is a `Validation` error. Username is checked first, then email; either
/// clash is a `Conflict`. The password is stored as an Argon2 hash.
#[instrument(
  name = "user_service::register",
  skip(session, new_user),
  fields(username = %new_user.username)
)]
pub async fn register(session: &mut dyn Session, mut new_user: NewUser) -> StorefrontResult<User> {
  new_user.email = new_user.email.to_lowercase();
  new_user.validate()?;

  if session.user_by_username(&new_user.username).await?.is_some() {
    warn!("Registration rejected: username already taken.");
    return Err(StorefrontError::Conflict("Username already exists".to_string()));
  }

  if session.user_by_email(&new_user.email).await?.is_some() {
    warn!(email = %new_user.email, "Registration rejected: email already taken.");
    return Err(StorefrontError::Conflict("Email already exists".to_string()));
  }

  new_user.password = auth_service::hash_password(&new_user.password)?;

  let user = session.insert_user(&new_user).await?;
  info!(user_id = user.id, "User registered.");
  Ok(user)
}

/// Every order `username` has placed, oldest first.
#[instrument(name = "user_service::list_orders_for", skip(session))]
pub async fn list_orders_for(session: &mut dyn Session, username: &str) -> StorefrontResult<Vec<Order>> {
  if session.user_by_username(username).await?.is_none() {
    warn!("Order listing for unknown user.");
    return Err(StorefrontError::NotFound("User not found".to_string()));
  }

  session.orders_of_user(username).await
}

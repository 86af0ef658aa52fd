// core/src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
  pub id: i64,
  pub username: String,
  #[serde(skip_serializing)] // Never send the password hash to a client
  pub password: String,
  pub email: String,
  pub name: String,
  pub address: String,
}

/// Registration payload. `password` is plaintext here; the user service hashes it
/// before anything is persisted. Length limits mirror the `users` columns.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewUser {
  #[validate(length(min = 1, max = 30, message = "Username must be between 1 and 30 characters"))]
  pub username: String,
  pub password: String,
  #[validate(
    email(message = "Invalid email format"),
    length(max = 50, message = "Email must be at most 50 characters")
  )]
  pub email: String,
  #[validate(length(max = 50, message = "Name must be at most 50 characters"))]
  pub name: String,
  #[validate(length(max = 50, message = "Address must be at most 50 characters"))]
  pub address: String,
}

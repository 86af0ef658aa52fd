// core/src/error.rs
use thiserror::Error;

/// SQLSTATE raised by Postgres for a violated unique constraint.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Error)]
pub enum StorefrontError {
  #[error("{0}")]
  NotFound(String),

  #[error("{0}")]
  Conflict(String),

  #[error("{0}")]
  Unauthorized(String),

  #[error("Validation error: {0}")]
  Validation(String),

  #[error("Database error: {0}")]
  Sqlx(sqlx::Error),

  #[error("Internal storefront error: {0}")]
  Internal(String),
}

impl StorefrontError {
  /// The credential failure every bad or expired token resolves to.
  pub fn invalid_credentials() -> Self {
    StorefrontError::Unauthorized("Could not validate credentials".to_string())
  }
}

// A unique violation means a concurrent insert won the check-then-insert race.
impl From<sqlx::Error> for StorefrontError {
  fn from(err: sqlx::Error) -> Self {
    if let sqlx::Error::Database(db_err) = &err {
      if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
        let detail = match db_err.constraint() {
          Some(constraint) => format!("Unique constraint '{}' violated", constraint),
          None => "Unique constraint violated".to_string(),
        };
        return StorefrontError::Conflict(detail);
      }
    }
    StorefrontError::Sqlx(err)
  }
}

impl From<validator::ValidationErrors> for StorefrontError {
  fn from(err: validator::ValidationErrors) -> Self {
    let mut messages: Vec<String> = err
      .field_errors()
      .into_iter()
      .flat_map(|(field, errors)| {
        errors.iter().map(move |error| match &error.message {
          Some(message) => message.to_string(),
          None => format!("Invalid value for '{}'", field),
        })
      })
      .collect();
    messages.sort();
    StorefrontError::Validation(messages.join(", "))
  }
}

pub type StorefrontResult<T, E = StorefrontError> = std::result::Result<T, E>;

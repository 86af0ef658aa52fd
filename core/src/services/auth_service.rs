// core/src/services/auth_service.rs

//! Password hashing and verification, credential checks, and bearer tokens.

use crate::error::{StorefrontError, StorefrontResult};
use crate::models::User;
use crate::store::Session;
use argon2::{
  password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
  Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

/// Lifetime of a token when the caller does not ask for another one.
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 15;

/// Hashes a plain-text password with Argon2 and a fresh random salt.
///
/// Returns the PHC string form of the hash. An empty password is a
/// `Validation` error.
#[instrument(name = "auth_service::hash_password", skip(password), err(Display))]
pub fn hash_password(password: &str) -> StorefrontResult<String> {
  if password.is_empty() {
    return Err(StorefrontError::Validation("Password cannot be empty.".to_string()));
  }

  let salt = SaltString::generate(&mut OsRng);
  match Argon2::default().hash_password(password.as_bytes(), &salt) {
    Ok(hash) => {
      debug!("Password hashed successfully.");
      Ok(hash.to_string())
    }
    Err(argon_err) => {
      error!(error = %argon_err, "Argon2 password hashing failed.");
      Err(StorefrontError::Internal(format!("Password hashing failed: {}", argon_err)))
    }
  }
}

/// Verifies `provided_password` against a stored Argon2 hash.
///
/// `Ok(false)` means the password does not match (an empty one never does).
/// A stored value that is not a valid PHC string is an `Internal` error.
#[instrument(name = "auth_service::verify_password", skip(hashed_password, provided_password), err(Display))]
pub fn verify_password(hashed_password: &str, provided_password: &str) -> StorefrontResult<bool> {
  if provided_password.is_empty() {
    return Ok(false);
  }

  let parsed_hash = PasswordHash::new(hashed_password).map_err(|parse_err| {
    error!(error = %parse_err, "Stored password hash is not a valid PHC string.");
    StorefrontError::Internal(format!("Invalid stored password hash: {}", parse_err))
  })?;

  match Argon2::default().verify_password(provided_password.as_bytes(), &parsed_hash) {
    Ok(()) => Ok(true),
    Err(argon2::password_hash::Error::Password) => Ok(false),
    Err(other) => {
      error!(error = %other, "Argon2 password verification failed.");
      Err(StorefrontError::Internal(format!("Password verification failed: {}", other)))
    }
  }
}

/// Looks up `username` and checks `password` against its stored hash.
///
/// `None` covers both an unknown user and a wrong password, so callers cannot
/// tell them apart.
#[instrument(name = "auth_service::authenticate", skip(session, password))]
pub async fn authenticate(
  session: &mut dyn Session,
  username: &str,
  password: &str,
) -> StorefrontResult<Option<User>> {
  let user = match session.user_by_username(username).await? {
    Some(user) => user,
    None => {
      warn!("Authentication failed: unknown user.");
      return Ok(None);
    }
  };

  if verify_password(&user.password, password)? {
    info!(user_id = user.id, "User authenticated.");
    Ok(Some(user))
  } else {
    warn!("Authentication failed: password mismatch.");
    Ok(None)
  }
}

/// JWT payload. `sub` is optional on the wire so a token without it decodes
/// and is then rejected explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sub: Option<String>,
  pub exp: i64,
}

/// The caller a valid bearer token speaks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
  pub username: String,
}

/// HS256 signing and verification keys derived from one shared secret.
#[derive(Clone)]
pub struct TokenKeys {
  encoding: EncodingKey,
  decoding: DecodingKey,
}

impl std::fmt::Debug for TokenKeys {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("TokenKeys").field("algorithm", &Algorithm::HS256).finish_non_exhaustive()
  }
}

impl TokenKeys {
  pub fn from_secret(secret: &[u8]) -> Self {
    Self {
      encoding: EncodingKey::from_secret(secret),
      decoding: DecodingKey::from_secret(secret),
    }
  }

  /// Signs a token for `subject` that expires after `ttl`
  /// (`DEFAULT_TOKEN_TTL_MINUTES` when `None`).
  #[instrument(name = "auth_service::issue_token", skip(self), err(Display))]
  pub fn issue_token(&self, subject: &str, ttl: Option<Duration>) -> StorefrontResult<String> {
    let ttl = ttl.unwrap_or_else(|| Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES));
    let claims = Claims {
      sub: Some(subject.to_string()),
      exp: (Utc::now() + ttl).timestamp(),
    };
    jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
      .map_err(|e| StorefrontError::Internal(format!("Token signing failed: {}", e)))
  }

  /// Verifies signature and expiry and returns the identity in `sub`.
  ///
  /// Every failure, including a missing `sub`, is the same `Unauthorized`.
  pub fn resolve_identity(&self, token: &str) -> StorefrontResult<Identity> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
      warn!(error = %e, "Rejected bearer token.");
      StorefrontError::invalid_credentials()
    })?;

    match data.claims.sub {
      Some(username) => Ok(Identity { username }),
      None => {
        warn!("Rejected bearer token without a subject claim.");
        Err(StorefrontError::invalid_credentials())
      }
    }
  }
}

// app/src/web/extractors.rs

use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use storefront::StorefrontError;
use tracing::warn;

use crate::errors::AppError;
use crate::state::AppState;

/// The caller identified by a valid `Authorization: Bearer <token>` header.
///
/// Any handler taking this argument is authenticated; a missing, malformed,
/// tampered or expired token short-circuits with 401 before the handler runs.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
  pub username: String,
}

impl FromRequest for AuthenticatedUser {
  type Error = AppError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    ready(authenticate_request(req))
  }
}

fn authenticate_request(req: &HttpRequest) -> Result<AuthenticatedUser, AppError> {
  let app_state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
    AppError::Storefront(StorefrontError::Internal(
      "Application state is not registered".to_string(),
    ))
  })?;

  let token = bearer_token(req).ok_or_else(|| {
    warn!("Request without a bearer token.");
    AppError::unauthorized("Not authenticated")
  })?;

  let identity = app_state.tokens.resolve_identity(token)?;
  Ok(AuthenticatedUser {
    username: identity.username,
  })
}

fn bearer_token(req: &HttpRequest) -> Option<&str> {
  let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
  let (scheme, token) = value.split_once(' ')?;
  let token = token.trim();
  if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
    Some(token)
  } else {
    None
  }
}

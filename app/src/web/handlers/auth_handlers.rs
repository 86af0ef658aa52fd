// app/src/web/handlers/auth_handlers.rs

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use storefront::services::auth_service;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

/// OAuth2 password-grant style form body.
#[derive(Deserialize)]
pub struct TokenForm {
  pub username: String,
  pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
  pub access_token: String,
  pub token_type: String,
}

#[instrument(name = "handler::token", skip(app_state, form), fields(req_username = %form.username))]
pub async fn token_handler(
  app_state: web::Data<AppState>,
  form: web::Form<TokenForm>,
) -> Result<HttpResponse, AppError> {
  let TokenForm { username, password } = form.into_inner();

  let mut session = app_state.db.acquire().await?;
  let user = auth_service::authenticate(session.as_mut(), &username, &password)
    .await?
    .ok_or_else(|| AppError::unauthorized("Incorrect username or password"))?;
  drop(session);

  let access_token = app_state
    .tokens
    .issue_token(&user.username, Some(app_state.access_token_ttl()))?;

  info!("Access token issued.");
  Ok(HttpResponse::Ok().json(TokenResponse {
    access_token,
    token_type: "bearer".to_string(),
  }))
}

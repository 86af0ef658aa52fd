// app/src/web/handlers/user_handlers.rs

use actix_web::{web, HttpResponse};
use storefront::models::NewUser;
use storefront::services::user_service;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

#[instrument(
    name = "handler::create_user",
    skip(app_state, req_payload),
    fields(req_username = %req_payload.username)
)]
pub async fn create_user_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<NewUser>,
) -> Result<HttpResponse, AppError> {
  let mut session = app_state.db.acquire().await?;
  let user = user_service::register(session.as_mut(), req_payload.into_inner()).await?;

  info!(user_id = user.id, "User created.");
  Ok(HttpResponse::Ok().json(user))
}

#[instrument(name = "handler::list_user_orders", skip(app_state, auth_user), fields(username = %auth_user.username))]
pub async fn list_user_orders_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let mut session = app_state.db.acquire().await?;
  let orders = user_service::list_orders_for(session.as_mut(), &auth_user.username).await?;

  info!("Fetched {} orders.", orders.len());
  Ok(HttpResponse::Ok().json(orders))
}

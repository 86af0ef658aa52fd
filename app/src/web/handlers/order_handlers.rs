// app/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use storefront::models::OrderRequest;
use storefront::services::order_service;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

#[instrument(
    name = "handler::place_order",
    skip(app_state, req_payload, auth_user),
    fields(username = %auth_user.username, product_name = %req_payload.product_name)
)]
pub async fn place_order_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
  req_payload: web::Json<OrderRequest>,
) -> Result<HttpResponse, AppError> {
  let mut session = app_state.db.acquire().await?;
  let order = order_service::place_order(session.as_mut(), req_payload.into_inner(), &auth_user.username).await?;

  info!(order_id = order.id, "Order placed.");
  Ok(HttpResponse::Ok().json(order))
}

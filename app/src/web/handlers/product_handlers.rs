// app/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use storefront::models::NewProduct;
use storefront::services::product_service;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

#[instrument(
    name = "handler::create_product",
    skip(app_state, req_payload, auth_user),
    fields(username = %auth_user.username, product_name = %req_payload.name)
)]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
  req_payload: web::Json<NewProduct>,
) -> Result<HttpResponse, AppError> {
  let mut session = app_state.db.acquire().await?;
  let product = product_service::create(session.as_mut(), req_payload.into_inner()).await?;

  info!(product_id = product.id, "Product created.");
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::list_products", skip(app_state, auth_user), fields(username = %auth_user.username))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let mut session = app_state.db.acquire().await?;
  let products = product_service::list_all(session.as_mut()).await?;

  info!("Successfully fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path, _auth_user), fields(product_name = %path.as_str()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  _auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let product_name = path.into_inner();
  let mut session = app_state.db.acquire().await?;
  let product = product_service::get_by_name(session.as_mut(), &product_name).await?;

  Ok(HttpResponse::Ok().json(product))
}

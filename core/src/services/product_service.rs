// core/src/services/product_service.rs

use crate::error::{StorefrontError, StorefrontResult};
use crate::models::{now_utc, NewProduct, Product, PRICE_LIMIT};
use crate::store::Session;
use rust_decimal::Decimal;
use tracing::{info, instrument, warn};
use validator::Validate;

/// Prices are kept to whole cents.
const PRICE_SCALE: u32 = 2;

#[instrument(
  name = "product_service::create",
  skip(session, new_product),
  fields(name = %new_product.name)
)]
pub async fn create(session: &mut dyn Session, mut new_product: NewProduct) -> StorefrontResult<Product> {
  new_product.validate()?;
  new_product.price = new_product.price.round_dp(PRICE_SCALE);
  if new_product.price.abs() >= Decimal::from(PRICE_LIMIT) {
    warn!(price = %new_product.price, "Product creation rejected: price out of range.");
    return Err(StorefrontError::Validation(format!(
      "Price must be less than {} in absolute value",
      PRICE_LIMIT
    )));
  }

  if session.product_by_name(&new_product.name).await?.is_some() {
    warn!("Product creation rejected: name already taken.");
    return Err(StorefrontError::Conflict(format!(
      "Product with the name {} already exists",
      new_product.name
    )));
  }

  let product = session.insert_product(&new_product, now_utc()).await?;
  info!(product_id = product.id, price = %product.price, "Product created.");
  Ok(product)
}

#[instrument(name = "product_service::list_all", skip(session))]
pub async fn list_all(session: &mut dyn Session) -> StorefrontResult<Vec<Product>> {
  session.all_products().await
}

#[instrument(name = "product_service::get_by_name", skip(session))]
pub async fn get_by_name(session: &mut dyn Session, name: &str) -> StorefrontResult<Product> {
  session
    .product_by_name(name)
    .await?
    .ok_or_else(|| StorefrontError::NotFound("Product not found".to_string()))
}

// core/src/services/order_service.rs

//! Order placement.
//!
//! The duplicate check and the insert are two separate round trips with no
//! transaction or unique index around them. Two concurrent requests for the
//! same user and product can both pass the check and both insert.

use crate::error::{StorefrontError, StorefrontResult};
use crate::models::{now_utc, NewOrder, Order, OrderRequest};
use crate::store::Session;
use tracing::{info, instrument, warn};
use validator::Validate;

/// Places an order for `acting_username`.
///
/// Fails with `Validation` when the notes are too long, with `NotFound` when
/// the acting user or the product does not exist, and with `Conflict`
/// when the user already holds any order for it, whatever that order's status.
/// The total is the product's price at this moment.
#[instrument(
  name = "order_service::place_order",
  skip(session, request),
  fields(product_name = %request.product_name)
)]
pub async fn place_order(
  session: &mut dyn Session,
  request: OrderRequest,
  acting_username: &str,
) -> StorefrontResult<Order> {
  request.validate()?;

  if session.user_by_username(acting_username).await?.is_none() {
    warn!("Order rejected: acting user no longer exists.");
    return Err(StorefrontError::NotFound("User not found".to_string()));
  }

  let product = match session.product_by_name(&request.product_name).await? {
    Some(product) => product,
    None => {
      warn!("Order rejected: product not found.");
      return Err(StorefrontError::NotFound("Product not found".to_string()));
    }
  };

  if let Some(existing) = session.order_for(acting_username, &product.name).await? {
    warn!(existing_order_id = existing.id, "Order rejected: user already has an order for this product.");
    return Err(StorefrontError::Conflict(
      "You already have an active order with this product".to_string(),
    ));
  }

  let new_order = NewOrder::new(acting_username, product.name, now_utc(), product.price, request.notes);
  let order = session.insert_order(&new_order).await?;
  info!(order_id = order.id, total = %order.total, deadline = %order.deadline, "Order placed.");
  Ok(order)
}

// core/src/models/order.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Status every order starts in. No transitions out of it are exposed.
pub const DEFAULT_ORDER_STATUS: &str = "On the way";

/// Days between an order being placed and its deadline.
pub const ORDER_DEADLINE_DAYS: i64 = 7;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
  pub id: i64,
  pub user_username: String,
  pub product_name: String,
  pub order_date: DateTime<Utc>,
  pub deadline: DateTime<Utc>,
  pub status: String,
  #[serde(with = "rust_decimal::serde::float")]
  pub total: Decimal,
  pub notes: Option<String>,
}

/// What a caller sends to place an order; the acting user comes from the token.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OrderRequest {
  pub product_name: String,
  #[serde(default)]
  #[validate(length(max = 150, message = "Notes must be at most 150 characters"))]
  pub notes: Option<String>,
}

/// A fully computed order ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewOrder {
  pub user_username: String,
  pub product_name: String,
  pub order_date: DateTime<Utc>,
  pub deadline: DateTime<Utc>,
  pub status: String,
  pub total: Decimal,
  pub notes: Option<String>,
}

impl NewOrder {
  /// Builds an order placed at `order_date`, due `ORDER_DEADLINE_DAYS` later,
  /// in the default status.
  pub fn new(
    user_username: impl Into<String>,
    product_name: impl Into<String>,
    order_date: DateTime<Utc>,
    total: Decimal,
    notes: Option<String>,
  ) -> Self {
    Self {
      user_username: user_username.into(),
      product_name: product_name.into(),
      order_date,
      deadline: order_date + chrono::Duration::days(ORDER_DEADLINE_DAYS),
      status: DEFAULT_ORDER_STATUS.to_string(),
      total,
      notes,
    }
  }
}

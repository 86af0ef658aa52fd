// core/src/models/product.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
  pub id: i64,
  pub name: String,
  pub description: String,
  #[serde(with = "rust_decimal::serde::float")]
  pub price: Decimal,
  pub created_date: DateTime<Utc>,
  pub stock: i32,
}

/// Largest absolute price a `NUMERIC(7, 2)` column holds, exclusive.
pub const PRICE_LIMIT: i64 = 100_000;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewProduct {
  #[validate(length(min = 1, max = 50, message = "Product name must be between 1 and 50 characters"))]
  pub name: String,
  #[validate(length(max = 150, message = "Description must be at most 150 characters"))]
  pub description: String,
  #[serde(with = "rust_decimal::serde::float")]
  pub price: Decimal,
  pub stock: i32,
}

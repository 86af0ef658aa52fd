// core/src/models/mod.rs

//! Data structures for the three persisted entities and the payloads that create them.

pub mod order;
pub mod product;
pub mod user;

pub use order::{NewOrder, Order, OrderRequest, DEFAULT_ORDER_STATUS, ORDER_DEADLINE_DAYS};
pub use product::{NewProduct, Product, PRICE_LIMIT};
pub use user::{NewUser, User};

use chrono::{DateTime, SubsecRound, Utc};

/// Current time at the precision Postgres keeps (microseconds), so values
/// computed here survive a round trip through `TIMESTAMPTZ` unchanged.
pub fn now_utc() -> DateTime<Utc> {
  Utc::now().trunc_subsecs(6)
}

// core/src/store/mod.rs

//! Storage seams for the services.
//!
//! A [`Database`] hands out one [`Session`] per unit of work. The session owns
//! whatever connection backs it and gives it back when dropped, so callers
//! acquire it at the top of a request, pass `&mut` to services, and let it fall
//! out of scope on every exit path.

pub mod memory;
pub mod postgres;

pub use memory::MemoryDatabase;
pub use postgres::PgDatabase;

use crate::error::StorefrontResult;
use crate::models::{NewOrder, NewProduct, NewUser, Order, Product, User};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait UserStore: Send {
  /// Persists `user` as given; the password must already be hashed.
  async fn insert_user(&mut self, user: &NewUser) -> StorefrontResult<User>;
  async fn user_by_username(&mut self, username: &str) -> StorefrontResult<Option<User>>;
  async fn user_by_email(&mut self, email: &str) -> StorefrontResult<Option<User>>;
}

#[async_trait]
pub trait ProductStore: Send {
  async fn insert_product(&mut self, product: &NewProduct, created_date: DateTime<Utc>) -> StorefrontResult<Product>;
  async fn product_by_name(&mut self, name: &str) -> StorefrontResult<Option<Product>>;
  /// All products in insertion order.
  async fn all_products(&mut self) -> StorefrontResult<Vec<Product>>;
}

#[async_trait]
pub trait OrderStore: Send {
  async fn insert_order(&mut self, order: &NewOrder) -> StorefrontResult<Order>;
  /// First order `user_username` holds for `product_name`, whatever its status.
  async fn order_for(&mut self, user_username: &str, product_name: &str) -> StorefrontResult<Option<Order>>;
  /// All orders of one user in insertion order.
  async fn orders_of_user(&mut self, user_username: &str) -> StorefrontResult<Vec<Order>>;
}

/// One scoped unit of access to every table.
pub trait Session: UserStore + ProductStore + OrderStore {}

impl<T: UserStore + ProductStore + OrderStore> Session for T {}

#[async_trait]
pub trait Database: Send + Sync {
  /// Acquires a session. It is released when the returned box is dropped.
  async fn acquire(&self) -> StorefrontResult<Box<dyn Session>>;
}

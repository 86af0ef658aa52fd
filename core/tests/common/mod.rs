// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every fixture

use once_cell::sync::Lazy;
use storefront::models::{NewProduct, NewUser, Product, User};
use storefront::services::{product_service, user_service};
use storefront::{Database, Decimal, MemoryDatabase, Session};
use tracing::Level;

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// A fresh in-memory database and one session over it.
pub async fn fresh_session() -> (MemoryDatabase, Box<dyn Session>) {
  setup_tracing();
  let db = MemoryDatabase::new();
  let session = db.acquire().await.expect("memory session");
  (db, session)
}

pub fn new_user(username: &str, email: &str) -> NewUser {
  NewUser {
    username: username.to_string(),
    password: "pw".to_string(),
    email: email.to_string(),
    name: format!("{} Example", username),
    address: "1 Main St".to_string(),
  }
}

pub fn new_product(name: &str, price: Decimal, stock: i32) -> NewProduct {
  NewProduct {
    name: name.to_string(),
    description: format!("A {}", name),
    price,
    stock,
  }
}

pub async fn register(session: &mut dyn Session, username: &str, email: &str) -> User {
  user_service::register(session, new_user(username, email))
    .await
    .expect("registration should succeed")
}

pub async fn create_product(session: &mut dyn Session, name: &str, price: Decimal) -> Product {
  product_service::create(session, new_product(name, price, 5))
    .await
    .expect("product creation should succeed")
}

// core/src/store/memory.rs

//! In-process storage with the same observable behavior as the Postgres store:
//! ids count up from 1, listings keep insertion order, and the unique and
//! foreign-key rules of the schema are enforced. Column widths and the price
//! range are not checked here; the services reject such input before any insert.

use super::{Database, OrderStore, ProductStore, Session, UserStore};
use crate::error::{StorefrontError, StorefrontResult};
use crate::models::{NewOrder, NewProduct, NewUser, Order, Product, User};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Tables {
  users: Vec<User>,
  products: Vec<Product>,
  orders: Vec<Order>,
}

fn next_id(len: usize) -> i64 {
  len as i64 + 1
}

/// Cloning shares the same tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
  tables: Arc<Mutex<Tables>>,
}

impl MemoryDatabase {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl Database for MemoryDatabase {
  async fn acquire(&self) -> StorefrontResult<Box<dyn Session>> {
    Ok(Box::new(MemorySession {
      tables: Arc::clone(&self.tables),
    }))
  }
}

pub struct MemorySession {
  tables: Arc<Mutex<Tables>>,
}

#[async_trait]
impl UserStore for MemorySession {
  async fn insert_user(&mut self, user: &NewUser) -> StorefrontResult<User> {
    let mut tables = self.tables.lock();
    if tables.users.iter().any(|u| u.username == user.username) {
      return Err(StorefrontError::Conflict("Unique constraint 'users_username_key' violated".to_string()));
    }
    if tables.users.iter().any(|u| u.email == user.email) {
      return Err(StorefrontError::Conflict("Unique constraint 'users_email_key' violated".to_string()));
    }
    let created = User {
      id: next_id(tables.users.len()),
      username: user.username.clone(),
      password: user.password.clone(),
      email: user.email.clone(),
      name: user.name.clone(),
      address: user.address.clone(),
    };
    tables.users.push(created.clone());
    Ok(created)
  }

  async fn user_by_username(&mut self, username: &str) -> StorefrontResult<Option<User>> {
    Ok(self.tables.lock().users.iter().find(|u| u.username == username).cloned())
  }

  async fn user_by_email(&mut self, email: &str) -> StorefrontResult<Option<User>> {
    Ok(self.tables.lock().users.iter().find(|u| u.email == email).cloned())
  }
}

#[async_trait]
impl ProductStore for MemorySession {
  async fn insert_product(&mut self, product: &NewProduct, created_date: DateTime<Utc>) -> StorefrontResult<Product> {
    let mut tables = self.tables.lock();
    if tables.products.iter().any(|p| p.name == product.name) {
      return Err(StorefrontError::Conflict("Unique constraint 'products_name_key' violated".to_string()));
    }
    let created = Product {
      id: next_id(tables.products.len()),
      name: product.name.clone(),
      description: product.description.clone(),
      price: product.price,
      created_date,
      stock: product.stock,
    };
    tables.products.push(created.clone());
    Ok(created)
  }

  async fn product_by_name(&mut self, name: &str) -> StorefrontResult<Option<Product>> {
    Ok(self.tables.lock().products.iter().find(|p| p.name == name).cloned())
  }

  async fn all_products(&mut self) -> StorefrontResult<Vec<Product>> {
    Ok(self.tables.lock().products.clone())
  }
}

#[async_trait]
impl OrderStore for MemorySession {
  async fn insert_order(&mut self, order: &NewOrder) -> StorefrontResult<Order> {
    let mut tables = self.tables.lock();
    if !tables.users.iter().any(|u| u.username == order.user_username) {
      return Err(StorefrontError::Internal(format!(
        "Foreign key violation: no user '{}'",
        order.user_username
      )));
    }
    if !tables.products.iter().any(|p| p.name == order.product_name) {
      return Err(StorefrontError::Internal(format!(
        "Foreign key violation: no product '{}'",
        order.product_name
      )));
    }
    let created = Order {
      id: next_id(tables.orders.len()),
      user_username: order.user_username.clone(),
      product_name: order.product_name.clone(),
      order_date: order.order_date,
      deadline: order.deadline,
      status: order.status.clone(),
      total: order.total,
      notes: order.notes.clone(),
    };
    tables.orders.push(created.clone());
    Ok(created)
  }

  async fn order_for(&mut self, user_username: &str, product_name: &str) -> StorefrontResult<Option<Order>> {
    Ok(
      self
        .tables
        .lock()
        .orders
        .iter()
        .find(|o| o.user_username == user_username && o.product_name == product_name)
        .cloned(),
    )
  }

  async fn orders_of_user(&mut self, user_username: &str) -> StorefrontResult<Vec<Order>> {
    Ok(
      self
        .tables
        .lock()
        .orders
        .iter()
        .filter(|o| o.user_username == user_username)
        .cloned()
        .collect(),
    )
  }
}

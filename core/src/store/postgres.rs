// core/src/store/postgres.rs

//! Postgres-backed storage via sqlx runtime queries.

use super::{Database, OrderStore, ProductStore, Session, UserStore};
use crate::error::StorefrontResult;
use crate::models::{NewOrder, NewProduct, NewUser, Order, Product, User};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::pool::PoolConnection;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres};
use tracing::{debug, info, instrument};

// Orders reference users and products by natural key. No unique index on
// (user_username, product_name): one order per product is an order-service check.
const SCHEMA: &[&str] = &[
  "CREATE TABLE IF NOT EXISTS users (
    id BIGSERIAL PRIMARY KEY,
    username VARCHAR(30) NOT NULL UNIQUE,
    password VARCHAR(255) NOT NULL,
    email VARCHAR(50) NOT NULL UNIQUE,
    name VARCHAR(50) NOT NULL,
    address VARCHAR(50) NOT NULL
  )",
  "CREATE TABLE IF NOT EXISTS products (
    id BIGSERIAL PRIMARY KEY,
    name VARCHAR(50) NOT NULL UNIQUE,
    description VARCHAR(150) NOT NULL,
    price NUMERIC(7, 2) NOT NULL,
    created_date TIMESTAMPTZ NOT NULL,
    stock INTEGER NOT NULL
  )",
  "CREATE TABLE IF NOT EXISTS orders (
    id BIGSERIAL PRIMARY KEY,
    user_username VARCHAR(30) NOT NULL REFERENCES users (username),
    product_name VARCHAR(50) NOT NULL REFERENCES products (name),
    order_date TIMESTAMPTZ NOT NULL,
    deadline TIMESTAMPTZ NOT NULL,
    status VARCHAR(50) NOT NULL DEFAULT 'On the way',
    total NUMERIC(7, 2) NOT NULL,
    notes VARCHAR(150)
  )",
  "CREATE INDEX IF NOT EXISTS orders_user_product_idx ON orders (user_username, product_name)",
];

const USER_COLUMNS: &str = "id, username, password, email, name, address";
const PRODUCT_COLUMNS: &str = "id, name, description, price, created_date, stock";
const ORDER_COLUMNS: &str = "id, user_username, product_name, order_date, deadline, status, total, notes";

#[derive(Debug, Clone)]
pub struct PgDatabase {
  pool: PgPool,
}

impl PgDatabase {
  pub async fn connect(database_url: &str, max_connections: u32) -> StorefrontResult<Self> {
    let pool = PgPoolOptions::new()
      .max_connections(max_connections)
      .connect(database_url)
      .await?;
    info!(max_connections, "Connected to Postgres.");
    Ok(Self { pool })
  }

  /// Creates the tables if they are absent. Safe to call on every start.
  #[instrument(name = "pg::ensure_schema", skip(self), err(Display))]
  pub async fn ensure_schema(&self) -> StorefrontResult<()> {
    for statement in SCHEMA {
      sqlx::query(*statement).execute(&self.pool).await?;
    }
    info!("Database schema is in place.");
    Ok(())
  }
}

#[async_trait]
impl Database for PgDatabase {
  async fn acquire(&self) -> StorefrontResult<Box<dyn Session>> {
    let conn = self.pool.acquire().await?;
    debug!("Acquired pooled connection for session.");
    Ok(Box::new(PgSession { conn }))
  }
}

/// A session over one pooled connection; dropping it returns the connection.
pub struct PgSession {
  conn: PoolConnection<Postgres>,
}

#[async_trait]
impl UserStore for PgSession {
  async fn insert_user(&mut self, user: &NewUser) -> StorefrontResult<User> {
    let created = sqlx::query_as::<_, User>(&format!(
      "INSERT INTO users (username, password, email, name, address) VALUES ($1, $2, $3, $4, $5) RETURNING {}",
      USER_COLUMNS
    ))
    .bind(&user.username)
    .bind(&user.password)
    .bind(&user.email)
    .bind(&user.name)
    .bind(&user.address)
    .fetch_one(&mut *self.conn)
    .await?;
    Ok(created)
  }

  async fn user_by_username(&mut self, username: &str) -> StorefrontResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE username = $1", USER_COLUMNS))
      .bind(username)
      .fetch_optional(&mut *self.conn)
      .await?;
    Ok(user)
  }

  async fn user_by_email(&mut self, email: &str) -> StorefrontResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS))
      .bind(email)
      .fetch_optional(&mut *self.conn)
      .await?;
    Ok(user)
  }
}

#[async_trait]
impl ProductStore for PgSession {
  async fn insert_product(&mut self, product: &NewProduct, created_date: DateTime<Utc>) -> StorefrontResult<Product> {
    let created = sqlx::query_as::<_, Product>(&format!(
      "INSERT INTO products (name, description, price, created_date, stock) VALUES ($1, $2, $3, $4, $5) RETURNING {}",
      PRODUCT_COLUMNS
    ))
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price)
    .bind(created_date)
    .bind(product.stock)
    .fetch_one(&mut *self.conn)
    .await?;
    Ok(created)
  }

  async fn product_by_name(&mut self, name: &str) -> StorefrontResult<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(&format!("SELECT {} FROM products WHERE name = $1", PRODUCT_COLUMNS))
      .bind(name)
      .fetch_optional(&mut *self.conn)
      .await?;
    Ok(product)
  }

  async fn all_products(&mut self) -> StorefrontResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(&format!("SELECT {} FROM products ORDER BY id ASC", PRODUCT_COLUMNS))
      .fetch_all(&mut *self.conn)
      .await?;
    Ok(products)
  }
}

#[async_trait]
impl OrderStore for PgSession {
  async fn insert_order(&mut self, order: &NewOrder) -> StorefrontResult<Order> {
    let created = sqlx::query_as::<_, Order>(&format!(
      "INSERT INTO orders (user_username, product_name, order_date, deadline, status, total, notes) \
       VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {}",
      ORDER_COLUMNS
    ))
    .bind(&order.user_username)
    .bind(&order.product_name)
    .bind(order.order_date)
    .bind(order.deadline)
    .bind(&order.status)
    .bind(order.total)
    .bind(&order.notes)
    .fetch_one(&mut *self.conn)
    .await?;
    Ok(created)
  }

  async fn order_for(&mut self, user_username: &str, product_name: &str) -> StorefrontResult<Option<Order>> {
    let order = sqlx::query_as::<_, Order>(&format!(
      "SELECT {} FROM orders WHERE user_username = $1 AND product_name = $2 ORDER BY id ASC LIMIT 1",
      ORDER_COLUMNS
    ))
    .bind(user_username)
    .bind(product_name)
    .fetch_optional(&mut *self.conn)
    .await?;
    Ok(order)
  }

  async fn orders_of_user(&mut self, user_username: &str) -> StorefrontResult<Vec<Order>> {
    let orders = sqlx::query_as::<_, Order>(&format!(
      "SELECT {} FROM orders WHERE user_username = $1 ORDER BY id ASC",
      ORDER_COLUMNS
    ))
    .bind(user_username)
    .fetch_all(&mut *self.conn)
    .await?;
    Ok(orders)
  }
}

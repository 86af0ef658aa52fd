// core/src/lib.rs

//! Storefront: users, a product catalog and orders behind a small set of
//! business rules.
//!
//!  - `models`: the persisted entities and the payloads that create them.
//!  - `store`: storage traits, a Postgres implementation and an in-memory one.
//!  - `services`: registration, catalog, order placement and authentication.
//!
//! Every operation takes a `&mut dyn Session` acquired from a `Database` for
//! the duration of one request.

pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use crate::error::{StorefrontError, StorefrontResult};
pub use crate::services::auth_service::{Identity, TokenKeys};
pub use crate::store::{Database, MemoryDatabase, PgDatabase, Session};

pub use rust_decimal::Decimal;

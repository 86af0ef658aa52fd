// app/src/lib.rs

//! HTTP surface of the storefront: configuration, error mapping, shared state
//! and the actix-web routes. `main.rs` wires these to Postgres.

pub mod config;
pub mod errors;
pub mod state;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::AppError;
pub use crate::state::AppState;

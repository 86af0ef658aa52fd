// core/src/services/mod.rs

//! Business rules applied on top of a [`Session`](crate::store::Session).
//!
//! Services hold no state between calls; each takes the caller's session by
//! `&mut` and leaves acquiring and releasing it to the caller.

pub mod auth_service;
pub mod order_service;
pub mod product_service;
pub mod user_service;

//! # realty-entity
//!
//! Domain entity models for the Realty listing backend. Every struct in
//! this crate represents a database table row or a write payload. Row
//! entities additionally derive `sqlx::FromRow`.

pub mod home;
pub mod message;
pub mod user;

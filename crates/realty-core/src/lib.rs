//! # realty-core
//!
//! Core crate for the Realty listing backend. Contains configuration
//! schemas, typed identifiers, response envelopes, and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other Realty crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;

//! # realty-service
//!
//! Business logic service layer for Realty. Services orchestrate the
//! persistence gateway and the auth primitives to implement account,
//! listing, and inquiry use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod context;
pub mod home;

#[cfg(test)]
mod test_support;

pub use auth::{AuthService, SignUpParams};
pub use context::RequestContext;
pub use home::{HomeDetail, HomeService, NewHome};

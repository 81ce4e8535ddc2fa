//! # realty-api
//!
//! HTTP API layer for Realty built on Axum.
//!
//! Provides the REST endpoints, the two-stage access control middleware
//! (identity resolution, then per-route role gates), extractors, DTOs,
//! and the application builder.

pub mod app;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use state::AppState;

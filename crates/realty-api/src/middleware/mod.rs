//! Axum middleware stack.

pub mod cors;
pub mod guard;
pub mod identity;
pub mod logging;

//! Account registration and sign-in.

pub mod service;

pub use service::{AuthService, SignUpParams};

//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use realty_core::config::AppConfig;
use realty_database::Gateway;
use realty_service::{AuthService, HomeService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Store handles (PostgreSQL or in-memory)
    pub gateway: Gateway,

    // ── Services ─────────────────────────────────────────────
    /// Registration, sign-in, product keys, identity resolution
    pub auth_service: Arc<AuthService>,
    /// Listings and inquiries
    pub home_service: Arc<HomeService>,
}

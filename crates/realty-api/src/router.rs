//! Route definitions for the Realty HTTP API.
//!
//! Routes are grouped by the role set allowed through them. Every group
//! except the public one is wrapped in a role gate, and the identity
//! middleware runs in front of all of them.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};

use realty_auth::guard::RoleSet;

use crate::handlers;
use crate::middleware;
use crate::middleware::guard::require_roles;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(require_roles(lister_routes(), RoleSet::LISTERS))
        .merge(require_roles(buyer_routes(), RoleSet::BUYERS))
        .merge(require_roles(admin_routes(), RoleSet::ADMINS))
        .merge(require_roles(account_routes(), RoleSet::AUTHENTICATED))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::identity::resolve_identity,
        ))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Search, listing detail, realtor lookup, sign-up/in, health
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/home", get(handlers::home::search_homes))
        .route("/home/{id}", get(handlers::home::get_home))
        .route("/home/{id}/realtor", get(handlers::home::get_realtor))
        .route("/auth/signup/{role}", post(handlers::auth::sign_up))
        .route("/auth/signin", post(handlers::auth::sign_in))
        .route("/health", get(handlers::health::health))
}

/// Listing management and inquiry inbox (ownership checked in handlers)
fn lister_routes() -> Router<AppState> {
    Router::new()
        .route("/home", post(handlers::home::create_home))
        .route(
            "/home/{id}",
            axum::routing::put(handlers::home::update_home).delete(handlers::home::delete_home),
        )
        .route("/home/{id}/messages", get(handlers::home::list_messages))
}

/// Buyer inquiries
fn buyer_routes() -> Router<AppState> {
    Router::new().route("/home/{id}/inquire", post(handlers::home::inquire))
}

/// Product key issuance
fn admin_routes() -> Router<AppState> {
    Router::new().route("/auth/key", post(handlers::auth::generate_product_key))
}

/// Caller identity
fn account_routes() -> Router<AppState> {
    Router::new().route("/auth/me", get(handlers::auth::me))
}

//! Second access-control stage: per-route role gates.

use axum::Router;
use axum::extract::Request;
use axum::middleware::{self as axum_middleware, Next};
use axum::response::Response;
use tracing::debug;

use realty_auth::guard::RoleSet;
use realty_core::error::AppError;
use realty_service::context::RequestContext;

use crate::state::AppState;

/// Rejects the request unless its identity holds a role in `roles`.
pub async fn enforce(roles: RoleSet, request: Request, next: Next) -> Result<Response, AppError> {
    let role = request
        .extensions()
        .get::<RequestContext>()
        .map(|ctx| ctx.role);

    if let Err(e) = roles.authorize(role) {
        debug!(
            path = %request.uri().path(),
            allowed = %roles,
            "Rejected by role gate"
        );
        return Err(e);
    }

    Ok(next.run(request).await)
}

/// Gates every route of `router` behind `roles`.
pub fn require_roles(router: Router<AppState>, roles: RoleSet) -> Router<AppState> {
    router.route_layer(axum_middleware::from_fn(
        move |request: Request, next: Next| enforce(roles, request, next),
    ))
}

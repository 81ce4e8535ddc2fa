//! First access-control stage: attach the caller's identity.
//!
//! Runs on every request. A valid bearer token for an existing user
//! attaches a [`RequestContext`] extension carrying the user's current
//! role. Anything else leaves the request anonymous; rejection is the
//! route gate's job.

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use realty_service::context::RequestContext;

use crate::state::AppState;

/// Resolves the bearer token, if any, into a request extension.
pub async fn resolve_identity(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = bearer_token(request.headers()).map(str::to_owned);

    if let Some(token) = token {
        match state.auth_service.resolve_identity(&token).await {
            Ok(ctx) => {
                request.extensions_mut().insert::<RequestContext>(ctx);
            }
            Err(e) => debug!(reason = %e.message, "Ignoring unusable bearer token"),
        }
    }

    next.run(request).await
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

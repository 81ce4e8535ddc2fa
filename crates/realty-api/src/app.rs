//! Application builder: wires router, middleware, and state into an Axum app.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use realty_auth::jwt::{TokenIssuer, TokenVerifier};
use realty_auth::password::CredentialHasher;
use realty_auth::product_key::ProductKeys;
use realty_core::config::AppConfig;
use realty_core::error::AppError;
use realty_database::Gateway;
use realty_service::{AuthService, HomeService};

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(TimeoutLayer::new(timeout))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Constructs the auth primitives and services over the given stores.
pub fn build_state(config: AppConfig, gateway: Gateway) -> Result<AppState, AppError> {
    // ── Auth ─────────────────────────────────────────────────
    let hasher = CredentialHasher::new(&config.auth)?;
    let product_keys = Arc::new(ProductKeys::new(&config.auth, hasher.clone()));
    let issuer = Arc::new(TokenIssuer::new(&config.auth)?);
    let verifier = Arc::new(TokenVerifier::new(&config.auth));

    // ── Services ─────────────────────────────────────────────
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&gateway.users),
        Arc::new(hasher),
        product_keys,
        issuer,
        verifier,
    ));
    let home_service = Arc::new(HomeService::new(
        Arc::clone(&gateway.homes),
        Arc::clone(&gateway.messages),
        Arc::clone(&gateway.users),
    ));

    Ok(AppState {
        config: Arc::new(config),
        gateway,
        auth_service,
        home_service,
    })
}

/// Runs the Realty server until a shutdown signal arrives.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Realty server...");

    // ── Step 1: Connect stores ───────────────────────────────────
    tracing::info!(provider = %config.database.provider, "Initializing stores");
    let gateway = Gateway::connect(&config.database).await?;

    // ── Step 2: Build state ──────────────────────────────────────
    let addr = config.server.bind_address();
    let state = build_state(config, gateway)?;

    // ── Step 3: Build and start HTTP server ──────────────────────
    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Realty server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Realty server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

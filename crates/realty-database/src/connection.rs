//! PostgreSQL pool setup for the repositories.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use realty_core::config::{DatabaseConfig, DatabaseProvider};
use realty_core::error::{AppError, ErrorKind};
use realty_core::result::AppResult;

/// Pool sizing and timeouts taken from the database section.
pub fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections.min(config.max_connections))
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
}

/// Opens the listing database. Only valid for the postgres provider.
pub async fn open_pool(config: &DatabaseConfig) -> AppResult<PgPool> {
    if config.provider != DatabaseProvider::Postgres {
        return Err(AppError::configuration(format!(
            "The {} provider has no database to open",
            config.provider
        )));
    }

    info!(
        url = %mask_password(&config.url),
        max_connections = config.max_connections,
        "Opening listing database"
    );

    let pool = pool_options(config)
        .connect(&config.url)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to connect to database: {e}"),
                e,
            )
        })?;

    Ok(pool)
}

/// Run `SELECT 1` against a pool.
pub(crate) async fn ping(pool: &PgPool) -> AppResult<bool> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await
        .map(|v| v == 1)
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
}

/// Hides the password in a connection URL.
fn mask_password(url: &str) -> String {
    let Some((credentials, host)) = url.rsplit_once('@') else {
        return url.to_string();
    };
    let scheme_end = credentials.find("://").map_or(0, |p| p + 3);
    match credentials[scheme_end..].split_once(':') {
        Some((user, _)) => format!("{}{user}:****@{host}", &credentials[..scheme_end]),
        None => url.to_string(),
    }
}

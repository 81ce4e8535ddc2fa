//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! TOML files and `REALTY__`-prefixed environment variables. Each
//! sub-module represents a logical configuration section.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::database::{DatabaseConfig, DatabaseProvider};
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authentication settings.
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// Merges `config/default.toml`, an environment-specific overlay
    /// `config/{env}.toml`, and environment variables prefixed with
    /// `REALTY__` (e.g. `REALTY__AUTH__JWT_SECRET`).
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from("config/default", env)
    }

    /// Load configuration with an explicit base file path (extension optional).
    pub fn load_from(base: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(base).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("REALTY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot start a server.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.auth.jwt_secret.trim().is_empty() {
            return Err(AppError::configuration("auth.jwt_secret must be set"));
        }
        if self.auth.product_key_secret.trim().is_empty() {
            return Err(AppError::configuration(
                "auth.product_key_secret must be set",
            ));
        }
        if self.auth.token_ttl_seconds == 0
            || self.auth.token_ttl_seconds > auth::MAX_TOKEN_TTL_SECONDS
        {
            return Err(AppError::configuration(format!(
                "auth.token_ttl_seconds must be between 1 and {}",
                auth::MAX_TOKEN_TTL_SECONDS
            )));
        }
        if self.database.provider == DatabaseProvider::Postgres && self.database.url.is_empty() {
            return Err(AppError::configuration(
                "database.url is required for the postgres provider",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn config() -> AppConfig {
        AppConfig {
            server: ServerConfig::default(),
            database: DatabaseConfig {
                provider: DatabaseProvider::Memory,
                ..DatabaseConfig::default()
            },
            auth: AuthConfig::with_secrets("jwt", "pk"),
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_missing_secret_rejected() {
        let mut cfg = config();
        cfg.auth.product_key_secret = "  ".to_string();
        let err = cfg.validate().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);

        let mut cfg = config();
        cfg.auth.jwt_secret.clear();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_token_ttl_bounds() {
        let mut cfg = config();
        cfg.auth.token_ttl_seconds = 0;
        assert!(cfg.validate().is_err());
        cfg.auth.token_ttl_seconds = auth::MAX_TOKEN_TTL_SECONDS + 1;
        assert!(cfg.validate().is_err());
        cfg.auth.token_ttl_seconds = auth::MAX_TOKEN_TTL_SECONDS;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_postgres_requires_url() {
        let mut cfg = config();
        cfg.database.provider = DatabaseProvider::Postgres;
        assert!(cfg.validate().is_err());
        cfg.database.url = "postgres://localhost/realty".to_string();
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_auth_debug_masks_secrets() {
        let rendered = format!("{:?}", AuthConfig::with_secrets("topsecret", "alsosecret"));
        assert!(!rendered.contains("topsecret"));
        assert!(!rendered.contains("alsosecret"));
    }
}

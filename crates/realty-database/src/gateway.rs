//! Provider selection for the store traits.

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;

use realty_core::config::{DatabaseConfig, DatabaseProvider};
use realty_core::result::AppResult;

use crate::connection::open_pool;
use crate::memory::MemoryStore;
use crate::migration::run_migrations;
use crate::repositories::{HomeRepository, MessageRepository, UserRepository};
use crate::store::{HomeStore, MessageStore, UserStore};

/// The three stores the services are wired with.
#[derive(Clone)]
pub struct Gateway {
    /// Account records.
    pub users: Arc<dyn UserStore>,
    /// Listings and images.
    pub homes: Arc<dyn HomeStore>,
    /// Inquiries.
    pub messages: Arc<dyn MessageStore>,
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway").finish_non_exhaustive()
    }
}

impl Gateway {
    /// Connect to the configured provider, running migrations if enabled.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            DatabaseProvider::Postgres => {
                let pool = open_pool(config).await?;
                if config.run_migrations {
                    run_migrations(&pool).await?;
                }
                Ok(Self::postgres(pool))
            }
            DatabaseProvider::Memory => {
                info!("Using in-memory store; data is lost on shutdown");
                Ok(Self::memory(Arc::new(MemoryStore::new())))
            }
        }
    }

    /// Stores backed by PostgreSQL repositories.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(UserRepository::new(pool.clone())),
            homes: Arc::new(HomeRepository::new(pool.clone())),
            messages: Arc::new(MessageRepository::new(pool)),
        }
    }

    /// Stores sharing one in-memory instance.
    pub fn memory(store: Arc<MemoryStore>) -> Self {
        Self {
            users: store.clone(),
            homes: store.clone(),
            messages: store,
        }
    }
}

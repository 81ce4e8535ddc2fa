//! Shared wiring for service tests.

use std::sync::Arc;

use realty_auth::jwt::{TokenIssuer, TokenVerifier};
use realty_auth::password::CredentialHasher;
use realty_auth::product_key::ProductKeys;
use realty_core::config::AuthConfig;
use realty_database::memory::MemoryStore;
use realty_database::store::UserStore;
use realty_entity::user::{CreateUser, User, UserRole};

use crate::auth::AuthService;
use crate::context::RequestContext;
use crate::home::HomeService;

pub(crate) struct Fixture {
    pub store: Arc<MemoryStore>,
    pub issuer: Arc<TokenIssuer>,
    pub auth: AuthService,
    pub homes: HomeService,
}

impl Fixture {
    pub fn new() -> Self {
        let mut config = AuthConfig::with_secrets("test-jwt-secret", "test-product-secret");
        config.hash_memory_kib = 1024;
        config.hash_iterations = 1;

        let store = Arc::new(MemoryStore::new());
        let hasher = CredentialHasher::new(&config).unwrap();
        let issuer = Arc::new(TokenIssuer::new(&config).unwrap());
        let auth = AuthService::new(
            store.clone(),
            Arc::new(hasher.clone()),
            Arc::new(ProductKeys::new(&config, hasher)),
            issuer.clone(),
            Arc::new(TokenVerifier::new(&config)),
        );
        let homes = HomeService::new(store.clone(), store.clone(), store.clone());

        Self {
            store,
            issuer,
            auth,
            homes,
        }
    }

    pub fn users(&self) -> &dyn UserStore {
        self.store.as_ref()
    }

    /// Insert an account directly and return its context.
    pub async fn account(&self, email: &str, role: UserRole) -> (User, RequestContext) {
        let user = self
            .users()
            .create(&CreateUser {
                email: email.to_string(),
                password_hash: "unused".to_string(),
                name: email.split('@').next().unwrap_or(email).to_string(),
                phone: Some("555 0100".to_string()),
                role,
            })
            .await
            .unwrap();
        let ctx = RequestContext {
            user_id: user.id,
            name: user.name.clone(),
            role: user.role,
            expires_at: chrono::Utc::now() + chrono::Duration::hours(1),
        };
        (user, ctx)
    }
}

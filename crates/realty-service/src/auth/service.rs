//! Sign-up, sign-in, product keys, and identity resolution.

use std::sync::Arc;

use tracing::{info, warn};

use realty_auth::jwt::{TokenIssuer, TokenVerifier};
use realty_auth::password::CredentialHasher;
use realty_auth::product_key::ProductKeys;
use realty_core::error::AppError;
use realty_core::result::AppResult;
use realty_database::store::UserStore;
use realty_entity::user::{CreateUser, User, UserRole};

use crate::context::RequestContext;

/// Data submitted to register an account.
#[derive(Debug, Clone)]
pub struct SignUpParams {
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Display name.
    pub name: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Required for REALTOR and ADMIN registrations.
    pub product_key: Option<String>,
}

/// Handles account registration and authentication.
#[derive(Clone)]
pub struct AuthService {
    /// Account records.
    users: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<CredentialHasher>,
    /// Product key authority.
    product_keys: Arc<ProductKeys>,
    /// Token issuer.
    issuer: Arc<TokenIssuer>,
    /// Token verifier.
    verifier: Arc<TokenVerifier>,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService").finish_non_exhaustive()
    }
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<CredentialHasher>,
        product_keys: Arc<ProductKeys>,
        issuer: Arc<TokenIssuer>,
        verifier: Arc<TokenVerifier>,
    ) -> Self {
        Self {
            users,
            hasher,
            product_keys,
            issuer,
            verifier,
        }
    }

    /// Registers an account with `role` and returns an identity token.
    ///
    /// Elevated roles need a product key bound to the email and role. The
    /// key is checked before anything is written.
    pub async fn sign_up(&self, params: SignUpParams, role: UserRole) -> AppResult<String> {
        let email = normalize_email(&params.email);

        if role.is_elevated() {
            let key = params
                .product_key
                .as_deref()
                .ok_or_else(|| AppError::unauthorized("Product key required"))?;
            if !self.product_keys.verify(&email, role, key) {
                warn!(email = %email, role = %role, "Rejected sign-up with invalid product key");
                return Err(AppError::unauthorized("Invalid product key"));
            }
        }

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("Email already in use"));
        }

        let password_hash = self.hasher.hash(&params.password)?;
        let user = self
            .users
            .create(&CreateUser {
                email,
                password_hash,
                name: params.name,
                phone: params.phone,
                role,
            })
            .await?;

        info!(user_id = %user.id, role = %user.role, "User registered");

        self.issuer.issue(user.id, &user.name)
    }

    /// Checks credentials and returns an identity token.
    pub async fn sign_in(&self, email: &str, password: &str) -> AppResult<String> {
        let email = normalize_email(email);
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or_else(AppError::invalid_credentials)?;

        if !self.hasher.verify(password, &user.password_hash) {
            return Err(AppError::invalid_credentials());
        }

        info!(user_id = %user.id, "User signed in");
        self.issuer.issue(user.id, &user.name)
    }

    /// Issues a product key letting `email` register as `role`.
    pub fn generate_product_key(&self, email: &str, role: UserRole) -> AppResult<String> {
        self.product_keys.issue(&normalize_email(email), role)
    }

    /// Verifies a bearer token and loads the caller's current role.
    pub async fn resolve_identity(&self, token: &str) -> AppResult<RequestContext> {
        let claims = self.verifier.verify(token)?;
        let user = self
            .users
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| AppError::unauthorized("Unknown user"))?;

        Ok(RequestContext {
            user_id: user.id,
            name: claims.name.clone(),
            role: user.role,
            expires_at: claims.expires_at(),
        })
    }

    /// Loads the caller's stored account.
    pub async fn current_user(&self, ctx: &RequestContext) -> AppResult<User> {
        self.users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

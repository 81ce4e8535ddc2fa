//! Product keys gate registration for elevated roles.
//!
//! A key is a salted hash over `"{email}-{ROLE}-{secret}"`, so it is bound
//! to one email and one role and can be checked without a database lookup.

use realty_core::config::AuthConfig;
use realty_core::error::AppError;
use realty_entity::user::UserRole;

use crate::password::CredentialHasher;

/// Issues and verifies product keys.
#[derive(Clone)]
pub struct ProductKeys {
    hasher: CredentialHasher,
    secret: String,
}

impl std::fmt::Debug for ProductKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductKeys").finish_non_exhaustive()
    }
}

impl ProductKeys {
    /// Creates a product key authority from auth configuration.
    pub fn new(config: &AuthConfig, hasher: CredentialHasher) -> Self {
        Self {
            hasher,
            secret: config.product_key_secret.clone(),
        }
    }

    fn material(&self, email: &str, role: UserRole) -> String {
        format!("{email}-{role}-{}", self.secret)
    }

    /// Issues a key that lets `email` register as `role`.
    pub fn issue(&self, email: &str, role: UserRole) -> Result<String, AppError> {
        self.hasher.hash(&self.material(email, role))
    }

    /// Checks a presented key against `email` and `role`.
    pub fn verify(&self, email: &str, role: UserRole, key: &str) -> bool {
        self.hasher.verify(&self.material(email, role), key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(secret: &str) -> ProductKeys {
        let mut config = AuthConfig::with_secrets("jwt", secret);
        config.hash_memory_kib = 1024;
        config.hash_iterations = 1;
        ProductKeys::new(&config, CredentialHasher::new(&config).unwrap())
    }

    #[test]
    fn test_key_bound_to_email_and_role() {
        let keys = keys("pk-secret");
        let key = keys.issue("r@x.io", UserRole::Realtor).unwrap();

        assert!(keys.verify("r@x.io", UserRole::Realtor, &key));
        assert!(!keys.verify("r@x.io", UserRole::Admin, &key));
        assert!(!keys.verify("other@x.io", UserRole::Realtor, &key));
    }

    #[test]
    fn test_key_bound_to_secret() {
        let key = keys("one").issue("a@x.io", UserRole::Admin).unwrap();
        assert!(!keys("two").verify("a@x.io", UserRole::Admin, &key));
    }

    #[test]
    fn test_garbage_key() {
        assert!(!keys("s").verify("a@x.io", UserRole::Admin, "abc"));
    }
}

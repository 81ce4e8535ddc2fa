//! Argon2id password hashing and verification.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use realty_core::config::AuthConfig;
use realty_core::error::AppError;

/// Hashes and verifies secrets using Argon2id.
#[derive(Debug, Clone)]
pub struct CredentialHasher {
    params: Params,
}

impl CredentialHasher {
    /// Creates a hasher with the cost parameters from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let params = Params::new(
            config.hash_memory_kib,
            config.hash_iterations,
            config.hash_parallelism,
            None,
        )
        .map_err(|e| AppError::configuration(format!("Invalid Argon2 parameters: {e}")))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hashes a secret with a random salt, returning a PHC string.
    pub fn hash(&self, secret: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(secret.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a secret against a stored digest.
    ///
    /// A malformed digest never matches.
    pub fn verify(&self, secret: &str, digest: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(digest) else {
            return false;
        };
        // The digest carries its own parameters; the configured ones only
        // apply to new hashes.
        Argon2::default()
            .verify_password(secret.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> CredentialHasher {
        let mut config = AuthConfig::with_secrets("jwt", "pk");
        config.hash_memory_kib = 1024;
        config.hash_iterations = 1;
        CredentialHasher::new(&config).unwrap()
    }

    #[test]
    fn test_hash_then_verify() {
        let hasher = hasher();
        let digest = hasher.hash("Secr3t!9").unwrap();
        assert!(digest.starts_with("$argon2id$"));
        assert!(hasher.verify("Secr3t!9", &digest));
        assert!(!hasher.verify("secr3t!9", &digest));
    }

    #[test]
    fn test_salted() {
        let hasher = hasher();
        assert_ne!(hasher.hash("same").unwrap(), hasher.hash("same").unwrap());
    }

    #[test]
    fn test_malformed_digest() {
        assert!(!hasher().verify("anything", "not-a-digest"));
    }

    #[test]
    fn test_invalid_params() {
        let mut config = AuthConfig::with_secrets("jwt", "pk");
        config.hash_iterations = 0;
        assert!(CredentialHasher::new(&config).is_err());
    }
}

//! # realty-auth
//!
//! Authentication primitives for Realty:
//!
//! - **password**: Argon2id credential hashing
//! - **product_key**: registration keys for elevated roles
//! - **jwt**: identity token issuance and verification
//! - **guard**: per-route role sets

pub mod guard;
pub mod jwt;
pub mod password;
pub mod product_key;

pub use guard::RoleSet;
pub use jwt::{Claims, TokenIssuer, TokenVerifier};
pub use password::CredentialHasher;
pub use product_key::ProductKeys;

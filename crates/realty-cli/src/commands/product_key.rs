//! Issue product keys without a running server.
//!
//! This is how the first ADMIN account gets bootstrapped.

use clap::Args;
use serde::Serialize;

use realty_auth::password::CredentialHasher;
use realty_auth::product_key::ProductKeys;
use realty_core::config::AppConfig;
use realty_core::error::AppError;
use realty_entity::user::UserRole;

use crate::output::{self, OutputFormat};

/// Arguments for the product-key command
#[derive(Debug, Args)]
pub struct ProductKeyArgs {
    /// Email the key is bound to
    #[arg(long)]
    pub email: String,

    /// Role the key unlocks (REALTOR or ADMIN)
    #[arg(long, value_parser = parse_role)]
    pub role: UserRole,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IssuedKey<'a> {
    email: &'a str,
    role: UserRole,
    product_key: String,
}

/// Execute the product-key command
pub fn execute(
    args: &ProductKeyArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    if !args.role.is_elevated() {
        return Err(AppError::validation("USER accounts do not need a product key"));
    }

    let email = args.email.trim().to_lowercase();
    let keys = ProductKeys::new(&config.auth, CredentialHasher::new(&config.auth)?);
    let product_key = keys.issue(&email, args.role)?;

    match format {
        OutputFormat::Json => output::print_json(&IssuedKey {
            email: &email,
            role: args.role,
            product_key,
        }),
        OutputFormat::Text => {
            output::print_success("Product key issued");
            output::print_kv("Email", &email);
            output::print_kv("Role", args.role.as_str());
            output::print_kv("Key", &product_key);
        }
    }

    Ok(())
}

fn parse_role(value: &str) -> Result<UserRole, String> {
    value.parse().map_err(|e: AppError| e.message)
}

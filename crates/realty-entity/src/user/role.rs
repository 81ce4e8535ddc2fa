//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles a user account can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    /// Prospective buyer; may send inquiries.
    User,
    /// Lists and manages their own homes.
    Realtor,
    /// Full administrator; may issue product keys.
    Admin,
}

impl UserRole {
    /// Every role, in declaration order.
    pub const ALL: [UserRole; 3] = [Self::User, Self::Realtor, Self::Admin];

    /// Whether registering with this role requires a product key.
    pub fn is_elevated(&self) -> bool {
        !matches!(self, Self::User)
    }

    /// Whether this role may own listings.
    pub fn can_list_homes(&self) -> bool {
        matches!(self, Self::Realtor | Self::Admin)
    }

    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role as an uppercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Realtor => "REALTOR",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = realty_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USER" => Ok(Self::User),
            "REALTOR" => Ok(Self::Realtor),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(realty_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: USER, REALTOR, ADMIN"
            ))),
        }
    }
}

//! Request context carrying the authenticated caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use realty_core::types::UserId;
use realty_entity::user::UserRole;

/// Identity of the caller, attached to a request once its token has been
/// verified and the user's current role loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// Display name carried in the token.
    pub name: String,
    /// The user's role as currently stored.
    pub role: UserRole,
    /// When the presented token stops being valid.
    pub expires_at: DateTime<Utc>,
}

impl RequestContext {
    /// Returns whether the caller is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

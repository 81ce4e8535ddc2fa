//! Role sets declared by routes.

use std::fmt;

use realty_core::error::AppError;
use realty_entity::user::UserRole;

/// The roles allowed through a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleSet(&'static [UserRole]);

impl RoleSet {
    /// Any authenticated caller.
    pub const AUTHENTICATED: Self = Self(&UserRole::ALL);
    /// Buyers only.
    pub const BUYERS: Self = Self(&[UserRole::User]);
    /// Realtors and admins.
    pub const LISTERS: Self = Self(&[UserRole::Realtor, UserRole::Admin]);
    /// Admins only.
    pub const ADMINS: Self = Self(&[UserRole::Admin]);

    /// Whether the role belongs to the set.
    pub fn contains(&self, role: UserRole) -> bool {
        self.0.contains(&role)
    }

    /// Check an optional caller role against the set.
    pub fn authorize(&self, role: Option<UserRole>) -> Result<(), AppError> {
        match role {
            None => Err(AppError::unauthorized("Authentication required")),
            Some(role) if self.contains(role) => Ok(()),
            Some(role) => Err(AppError::unauthorized(format!(
                "Role '{role}' may not access this resource"
            ))),
        }
    }
}

impl fmt::Display for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(UserRole::as_str).collect();
        write!(f, "{}", names.join("|"))
    }
}

#[cfg(test)]
mod tests {
    use realty_core::error::ErrorKind;

    use super::*;

    #[test]
    fn test_authorize() {
        assert!(RoleSet::LISTERS.authorize(Some(UserRole::Realtor)).is_ok());
        assert!(RoleSet::LISTERS.authorize(Some(UserRole::Admin)).is_ok());

        let err = RoleSet::LISTERS
            .authorize(Some(UserRole::User))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);

        let err = RoleSet::AUTHENTICATED.authorize(None).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }

    #[test]
    fn test_buyers_exclude_realtors() {
        assert!(RoleSet::BUYERS.authorize(Some(UserRole::Realtor)).is_err());
        assert!(RoleSet::ADMINS.authorize(Some(UserRole::Realtor)).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(RoleSet::LISTERS.to_string(), "REALTOR|ADMIN");
    }
}

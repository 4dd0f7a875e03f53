//! User accounts and role gating.
//!
//! Roles form a flat set on each account; capability checks are plain
//! set-membership tests, no hierarchy.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

/// Application role assignable to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// Full control, including user management.
    SuperAdmin,
    /// Reference-data management.
    Admin,
    /// Regular clinical user.
    User,
}

impl Role {
    /// Returns the wire/display name of this role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "SuperAdmin",
            Self::Admin => "Admin",
            Self::User => "User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError(pub String);

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {}", self.0)
    }
}

impl std::error::Error for ParseRoleError {}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SuperAdmin" => Ok(Self::SuperAdmin),
            "Admin" => Ok(Self::Admin),
            "User" => Ok(Self::User),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

/// Tests whether a roles list grants the given role.
///
/// Plain set-membership over the wire strings; unknown role names in the
/// list are ignored rather than rejected.
pub fn has_role(roles: &[String], role: Role) -> bool {
    roles.iter().any(|r| r == role.as_str())
}

/// A managed user account as returned by the user-administration endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct UserAccount {
    /// Backend-assigned user id (opaque string).
    pub id: String,
    /// Login email.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Whether the email address has been verified.
    pub email_confirmed: bool,
    /// Whether the account can sign in.
    pub is_active: bool,
    /// Account creation instant.
    pub created_at: DateTime<Utc>,
    /// Last successful login, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub last_login_at: Option<DateTime<Utc>>,
    /// Assigned role names.
    #[cfg_attr(feature = "serde", serde(default))]
    pub roles: Vec<String>,
}

impl UserAccount {
    /// Tests whether this account holds the given role.
    pub fn has_role(&self, role: Role) -> bool {
        has_role(&self.roles, role)
    }
}

/// Pagination block of a user listing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct UserPagination {
    /// 1-based page index.
    pub current_page: u32,
    /// Items per page.
    pub page_size: u32,
    /// Total accounts across all pages.
    pub total_users: u64,
    /// Total page count.
    pub total_pages: u32,
}

/// Response of the paginated user listing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct UserPage {
    /// Accounts on this page.
    pub users: Vec<UserAccount>,
    /// Pagination metadata.
    pub pagination: UserPagination,
}

/// Payload for creating a user account.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NewUser {
    /// Login email.
    pub email: String,
    /// Initial password.
    pub password: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Initial role.
    pub role: Role,
}

/// Payload for updating a user account.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct UserUpdate {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Whether the account can sign in.
    pub is_active: bool,
}

/// Response of the user-creation endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct UserCreated {
    /// Human-readable outcome description.
    pub message: String,
    /// Backend-assigned id of the new account.
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_membership() {
        let roles = vec!["Admin".to_string(), "User".to_string()];
        assert!(has_role(&roles, Role::Admin));
        assert!(has_role(&roles, Role::User));
        assert!(!has_role(&roles, Role::SuperAdmin));
        assert!(!has_role(&[], Role::User));
    }

    #[test]
    fn test_unknown_role_names_ignored() {
        let roles = vec!["Auditor".to_string()];
        assert!(!has_role(&roles, Role::Admin));
    }

    #[test]
    fn test_role_parse() {
        assert_eq!("SuperAdmin".parse::<Role>(), Ok(Role::SuperAdmin));
        assert!("root".parse::<Role>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_user_page_wire_shape() {
        let json = r#"{
            "users": [{
                "id": "u-1",
                "email": "admin@example.org",
                "firstName": "Ana",
                "lastName": "Pham",
                "emailConfirmed": true,
                "isActive": true,
                "createdAt": "2025-01-10T08:30:00Z",
                "lastLoginAt": null,
                "roles": ["Admin"]
            }],
            "pagination": {
                "currentPage": 1,
                "pageSize": 10,
                "totalUsers": 1,
                "totalPages": 1
            }
        }"#;
        let page: UserPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.pagination.total_users, 1);
        assert!(page.users[0].has_role(Role::Admin));
        assert!(page.users[0].last_login_at.is_none());
    }
}

//! Authentication request/response types and the persisted session record.

use chrono::{DateTime, Utc};

use crate::user::{has_role, Role};

/// Request body for `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LoginRequest {
    /// Login email.
    pub email: String,
    /// Password.
    pub password: String,
}

/// Response body of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// Login email.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Assigned role names.
    #[cfg_attr(feature = "serde", serde(default))]
    pub roles: Vec<String>,
    /// Token expiry instant.
    pub expires_at: DateTime<Utc>,
}

/// Request body for `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RegisterRequest {
    /// Login email.
    pub email: String,
    /// Password.
    pub password: String,
    /// Password repeated for confirmation.
    pub confirm_password: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

/// Response body of `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RegisterResponse {
    /// Human-readable outcome description.
    pub message: String,
    /// The email a verification link was sent to.
    pub email: String,
}

/// Request body for `POST /auth/forgot-password`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ForgotPasswordRequest {
    /// Login email.
    pub email: String,
}

/// Request body for `POST /auth/reset-password`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ResetPasswordRequest {
    /// Login email.
    pub email: String,
    /// Reset token from the password-reset email.
    pub token: String,
    /// New password.
    pub new_password: String,
    /// New password repeated for confirmation.
    pub confirm_password: String,
}

/// Generic `{ "message": ... }` acknowledgement used by several auth
/// endpoints (register, verify, forgot/reset password).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MessageResponse {
    /// Human-readable outcome description.
    pub message: String,
}

/// Profile of the authenticated user, from `GET /auth/me`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct UserProfile {
    /// Login email.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Assigned role names.
    #[cfg_attr(feature = "serde", serde(default))]
    pub roles: Vec<String>,
}

/// Request body for role assignment/removal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RoleChangeRequest {
    /// Email of the target account.
    pub email: String,
    /// Role name to assign or remove.
    pub role: String,
}

/// The locally persisted authenticated session.
///
/// Written once at login, cleared at logout or when the backend rejects
/// the token. The `expires_at` instant is checked when the record is
/// loaded at application start.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use medmanager_types::{AuthUser, Role};
///
/// let session = AuthUser {
///     email: "nurse@example.org".to_string(),
///     first_name: "Minh".to_string(),
///     last_name: "Tran".to_string(),
///     roles: vec!["User".to_string()],
///     token: "jwt".to_string(),
///     expires_at: Utc::now() + Duration::hours(8),
/// };
///
/// assert!(!session.is_expired(Utc::now()));
/// assert!(session.has_role(Role::User));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AuthUser {
    /// Login email.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Assigned role names.
    #[cfg_attr(feature = "serde", serde(default))]
    pub roles: Vec<String>,
    /// Bearer token attached to outgoing requests.
    pub token: String,
    /// Token expiry instant.
    pub expires_at: DateTime<Utc>,
}

impl AuthUser {
    /// Returns true once the token expiry instant has passed.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Tests whether this session holds the given role.
    pub fn has_role(&self, role: Role) -> bool {
        has_role(&self.roles, role)
    }
}

impl From<LoginResponse> for AuthUser {
    fn from(response: LoginResponse) -> Self {
        Self {
            email: response.email,
            first_name: response.first_name,
            last_name: response.last_name,
            roles: response.roles,
            token: response.token,
            expires_at: response.expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session(expires_in: Duration) -> AuthUser {
        AuthUser {
            email: "user@example.org".to_string(),
            first_name: "Linh".to_string(),
            last_name: "Nguyen".to_string(),
            roles: vec!["User".to_string(), "Admin".to_string()],
            token: "token".to_string(),
            expires_at: Utc::now() + expires_in,
        }
    }

    #[test]
    fn test_expiry_check() {
        assert!(!session(Duration::hours(1)).is_expired(Utc::now()));
        assert!(session(Duration::hours(-1)).is_expired(Utc::now()));
    }

    #[test]
    fn test_session_roles() {
        let session = session(Duration::hours(1));
        assert!(session.has_role(Role::Admin));
        assert!(!session.has_role(Role::SuperAdmin));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_login_response_into_auth_user() {
        let json = r#"{
            "token": "jwt-token",
            "email": "user@example.org",
            "firstName": "Linh",
            "lastName": "Nguyen",
            "roles": ["User"],
            "expiresAt": "2026-09-01T12:00:00Z"
        }"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        let user = AuthUser::from(response);
        assert_eq!(user.token, "jwt-token");
        assert!(user.has_role(Role::User));
    }
}

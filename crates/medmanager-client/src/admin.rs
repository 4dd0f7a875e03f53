//! User administration over `/superadmin/users`.
//!
//! All of these endpoints require the SuperAdmin role; the backend
//! answers 403 otherwise and the error surfaces as [`ApiError::Status`].
//!
//! [`ApiError::Status`]: crate::ApiError::Status

use std::sync::Arc;

use medmanager_types::{MessageResponse, NewUser, UserAccount, UserCreated, UserPage, UserUpdate};

use crate::error::ApiResult;
use crate::transport::{send_json, to_body, ApiRequest, Transport};

/// Client for the user-administration endpoints.
#[derive(Clone)]
pub struct UserAdminApi {
    transport: Arc<dyn Transport>,
}

impl UserAdminApi {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Lists user accounts, paginated.
    pub async fn users(&self, page: u32, page_size: u32) -> ApiResult<UserPage> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::get("/superadmin/users")
                .query("page", page)
                .query("pageSize", page_size),
        )
        .await
    }

    /// Fetches one account by its backend id.
    pub async fn get(&self, id: &str) -> ApiResult<UserAccount> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::get(&format!("/superadmin/users/{id}")),
        )
        .await
    }

    /// Creates an account with an initial role.
    pub async fn create(&self, user: &NewUser) -> ApiResult<UserCreated> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::post("/superadmin/users").body(to_body(user)?),
        )
        .await
    }

    /// Updates an account's name and active flag.
    pub async fn update(&self, id: &str, update: &UserUpdate) -> ApiResult<MessageResponse> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::put(&format!("/superadmin/users/{id}")).body(to_body(update)?),
        )
        .await
    }

    /// Re-enables sign-in for a deactivated account.
    pub async fn activate(&self, id: &str) -> ApiResult<MessageResponse> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::post(&format!("/superadmin/users/{id}/activate")),
        )
        .await
    }

    /// Blocks sign-in for an account without deleting it.
    pub async fn deactivate(&self, id: &str) -> ApiResult<MessageResponse> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::post(&format!("/superadmin/users/{id}/deactivate")),
        )
        .await
    }

    /// Adds a role to an account.
    pub async fn assign_role(&self, id: &str, role: &str) -> ApiResult<MessageResponse> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::post(&format!("/superadmin/users/{id}/assign-role"))
                .body(serde_json::json!({ "role": role })),
        )
        .await
    }

    /// Removes a role from an account.
    pub async fn remove_role(&self, id: &str, role: &str) -> ApiResult<MessageResponse> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::post(&format!("/superadmin/users/{id}/remove-role"))
                .body(serde_json::json!({ "role": role })),
        )
        .await
    }

    /// Permanently deletes an account.
    pub async fn delete(&self, id: &str) -> ApiResult<MessageResponse> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::delete(&format!("/superadmin/users/{id}")),
        )
        .await
    }
}

//! Authentication endpoints.
//!
//! These wrappers only talk to `/auth`; the stored token lifecycle lives
//! in the transport and token-store layers.

use std::sync::Arc;

use medmanager_types::{
    ForgotPasswordRequest, LoginRequest, LoginResponse, MessageResponse, RegisterRequest,
    RegisterResponse, ResetPasswordRequest, RoleChangeRequest, UserProfile,
};

use crate::error::ApiResult;
use crate::transport::{send_json, send_unit, to_body, ApiRequest, Transport};

/// Client for `/auth` endpoints.
#[derive(Clone)]
pub struct AuthApi {
    transport: Arc<dyn Transport>,
}

impl AuthApi {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Registers a new account; a verification email is sent.
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<RegisterResponse> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::post("/auth/register").body(to_body(request)?),
        )
        .await
    }

    /// Verifies an email address with the emailed token.
    pub async fn verify_email(&self, email: &str, token: &str) -> ApiResult<MessageResponse> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::get("/auth/verify-email")
                .query("email", email)
                .query("token", token),
        )
        .await
    }

    /// Requests a fresh verification email.
    pub async fn resend_verification(&self, email: &str) -> ApiResult<MessageResponse> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::post("/auth/resend-verification")
                .body(serde_json::json!({ "email": email })),
        )
        .await
    }

    /// Authenticates and returns the session token.
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::post("/auth/login").body(to_body(request)?),
        )
        .await
    }

    /// Starts the password-reset flow.
    pub async fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
    ) -> ApiResult<MessageResponse> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::post("/auth/forgot-password").body(to_body(request)?),
        )
        .await
    }

    /// Completes the password-reset flow with the emailed token.
    pub async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> ApiResult<MessageResponse> {
        send_json(
            self.transport.as_ref(),
            ApiRequest::post("/auth/reset-password").body(to_body(request)?),
        )
        .await
    }

    /// Fetches the authenticated user's profile.
    pub async fn me(&self) -> ApiResult<UserProfile> {
        send_json(self.transport.as_ref(), ApiRequest::get("/auth/me")).await
    }

    /// Assigns a role to an account (SuperAdmin only).
    pub async fn assign_role(&self, request: &RoleChangeRequest) -> ApiResult<()> {
        send_unit(
            self.transport.as_ref(),
            ApiRequest::post("/auth/assign-role").body(to_body(request)?),
        )
        .await
    }

    /// Removes a role from an account (SuperAdmin only).
    pub async fn remove_role(&self, request: &RoleChangeRequest) -> ApiResult<()> {
        send_unit(
            self.transport.as_ref(),
            ApiRequest::post("/auth/remove-role").body(to_body(request)?),
        )
        .await
    }
}

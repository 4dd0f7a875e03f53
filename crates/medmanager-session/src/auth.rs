//! Authenticated-session lifecycle.

use std::sync::Arc;

use medmanager_client::{ApiResult, AuthApi, TokenStore};
use medmanager_types::{AuthUser, LoginRequest, Role};

/// Tracks who is signed in and keeps the token store in sync.
///
/// The token store is shared with the transport: a login here makes the
/// bearer token available to every subsequent request, and a 401 handled
/// by the transport clears the store underneath this session. Call
/// [`AuthSession::refresh`] to pick that up.
pub struct AuthSession {
    api: AuthApi,
    store: Arc<dyn TokenStore>,
    current: Option<AuthUser>,
}

impl AuthSession {
    /// Creates a session, restoring a previously persisted sign-in.
    ///
    /// An expired or unreadable stored record is discarded by the store,
    /// so the session starts signed out in that case.
    pub fn new(api: AuthApi, store: Arc<dyn TokenStore>) -> Self {
        let current = store.load();
        if let Some(user) = &current {
            tracing::debug!(email = %user.email, "restored persisted session");
        }
        Self {
            api,
            store,
            current,
        }
    }

    /// Signs in and persists the session.
    ///
    /// A failure to persist is logged and otherwise ignored; the session
    /// is still signed in for its own lifetime.
    pub async fn login(&mut self, email: &str, password: &str) -> ApiResult<&AuthUser> {
        let response = self
            .api
            .login(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;

        let user = AuthUser::from(response);
        if let Err(error) = self.store.save(&user) {
            tracing::warn!(%error, "failed to persist session");
        }
        tracing::info!(email = %user.email, "signed in");
        Ok(self.current.insert(user))
    }

    /// Signs out, clearing the persisted session.
    pub fn logout(&mut self) {
        self.store.clear();
        self.current = None;
        tracing::info!("signed out");
    }

    /// Re-reads the store, dropping a session the transport invalidated.
    pub fn refresh(&mut self) {
        self.current = self.store.load();
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&AuthUser> {
        self.current.as_ref()
    }

    /// True while a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// True while a user holding the given role is signed in.
    pub fn has_role(&self, role: Role) -> bool {
        self.current
            .as_ref()
            .map(|user| user.has_role(role))
            .unwrap_or(false)
    }
}

//! # medmanager-client
//!
//! Typed async client for the MedManager drug reference API.
//!
//! The crate is organized as one thin wrapper per backend resource
//! (drugs, interactions, diseases, catalogs, auth, user administration,
//! search analytics), all sharing a single [`Transport`]. The transport
//! owns the cross-cutting behavior: base-URL joining, the request
//! timeout, bearer-token injection from a [`TokenStore`], and clearing
//! the stored session when the backend answers 401.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use medmanager_client::{ApiClient, MemoryTokenStore};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let tokens = Arc::new(MemoryTokenStore::new());
//! let client = ApiClient::new("https://api.example.org/api", tokens)?;
//!
//! let hits = client.drugs().search("warfarin").await?;
//! let report = client.interactions().check(&[5, 12]).await?;
//! println!("{} hits, overall {}", hits.len(), report.overall_severity);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod admin;
mod analytics;
mod auth;
mod catalog;
mod diseases;
mod drugs;
mod error;
mod interactions;
#[cfg(test)]
mod testing;
mod token;
mod transport;

pub use admin::UserAdminApi;
pub use analytics::SearchAnalyticsApi;
pub use auth::AuthApi;
pub use catalog::{DosageFormApi, IngredientApi, MechanismApi, RouteApi};
pub use diseases::DiseaseApi;
pub use drugs::DrugApi;
pub use error::{ApiError, ApiResult};
pub use interactions::{InteractionApi, InteractionCheckResult};
pub use token::{FileTokenStore, MemoryTokenStore, TokenStore, TokenStoreError};
pub use transport::{
    ApiRequest, AuthInterceptor, HttpTransport, RawResponse, Transport, TransportError,
    DEFAULT_TIMEOUT,
};

/// Re-export of the wire types crate.
pub use medmanager_types as types;

use std::sync::Arc;

/// Entry point bundling all resource clients over one transport.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// Creates a client for the given API base URL.
    ///
    /// The token store is consulted on every request and cleared when the
    /// backend answers 401; share the same store with an auth session so
    /// logins take effect immediately.
    pub fn new(base_url: &str, tokens: Arc<dyn TokenStore>) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(base_url, Arc::clone(&tokens))?;
        Ok(Self::with_transport(Arc::new(AuthInterceptor::new(
            Arc::new(transport),
            tokens,
        ))))
    }

    /// Creates a client over an existing transport.
    ///
    /// Wrap the transport in an [`AuthInterceptor`] to keep the
    /// 401-clears-session rule when bringing your own implementation.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Drug lookup and monograph endpoints.
    pub fn drugs(&self) -> DrugApi {
        DrugApi::new(Arc::clone(&self.transport))
    }

    /// Drug-drug interaction endpoints.
    pub fn interactions(&self) -> InteractionApi {
        InteractionApi::new(Arc::clone(&self.transport))
    }

    /// Disease and treatment-protocol endpoints.
    pub fn diseases(&self) -> DiseaseApi {
        DiseaseApi::new(Arc::clone(&self.transport))
    }

    /// Ingredient catalog endpoints.
    pub fn ingredients(&self) -> IngredientApi {
        IngredientApi::new(Arc::clone(&self.transport))
    }

    /// Dosage-form catalog endpoints.
    pub fn dosage_forms(&self) -> DosageFormApi {
        DosageFormApi::new(Arc::clone(&self.transport))
    }

    /// Route-of-administration catalog endpoints.
    pub fn routes(&self) -> RouteApi {
        RouteApi::new(Arc::clone(&self.transport))
    }

    /// Interaction-mechanism catalog endpoints.
    pub fn mechanisms(&self) -> MechanismApi {
        MechanismApi::new(Arc::clone(&self.transport))
    }

    /// Authentication endpoints.
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(Arc::clone(&self.transport))
    }

    /// User-administration endpoints.
    pub fn users(&self) -> UserAdminApi {
        UserAdminApi::new(Arc::clone(&self.transport))
    }

    /// Search-analytics endpoints.
    pub fn analytics(&self) -> SearchAnalyticsApi {
        SearchAnalyticsApi::new(Arc::clone(&self.transport))
    }
}

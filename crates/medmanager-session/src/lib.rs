//! # medmanager-session
//!
//! Interactive session state for the MedManager clinical reference
//! client: the sign-in lifecycle, the debounced drug search box, and the
//! interaction-checker workflow.
//!
//! The crate sits on top of [`medmanager_client`] and owns the behavior
//! that makes a UI feel right rather than the wire protocol: keystrokes
//! are debounced before they become requests, late responses never
//! overwrite newer ones, and an interaction report is discarded the
//! moment the drug selection it describes changes.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use medmanager_client::{ApiClient, MemoryTokenStore, TokenStore};
//! use medmanager_session::{AuthSession, CheckerSession};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let tokens: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
//! let client = ApiClient::new("https://api.example.org/api", Arc::clone(&tokens))?;
//!
//! let mut auth = AuthSession::new(client.auth(), tokens);
//! auth.login("nurse@example.org", "secret").await?;
//!
//! let mut checker = CheckerSession::new(client.interactions());
//! for hit in client.drugs().search("warfarin").await? {
//!     checker.add_drug(hit);
//! }
//! if checker.can_check() {
//!     let report = checker.check().await?;
//!     println!("overall severity: {}", report.overall_severity);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod auth;
mod checker;
mod debounce;
mod search;
#[cfg(test)]
mod testing;

pub use auth::AuthSession;
pub use checker::CheckerSession;
pub use debounce::{schedule, CancellableHandle};
pub use search::{DrugSearchSession, DEFAULT_SEARCH_DELAY};

//! Persisted authentication-token storage.
//!
//! The web client keeps the authenticated session in browser local
//! storage; here the same lifecycle is modeled behind the [`TokenStore`]
//! trait: written once at login, read by the transport on every request,
//! cleared at logout or when the backend rejects the token. Expired
//! records are discarded on load.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Utc;
use thiserror::Error;

use medmanager_types::AuthUser;

/// Errors that can occur persisting a session record.
#[derive(Error, Debug)]
pub enum TokenStoreError {
    /// I/O error accessing the backing file.
    #[error("IO error accessing token store: {0}")]
    Io(#[from] std::io::Error),

    /// The session record could not be encoded.
    #[error("invalid session record: {0}")]
    Json(#[from] serde_json::Error),
}

/// Storage for the locally persisted authenticated session.
pub trait TokenStore: Send + Sync {
    /// Loads the stored session, discarding expired or unreadable records.
    fn load(&self) -> Option<AuthUser>;

    /// Persists a session record, replacing any previous one.
    fn save(&self, user: &AuthUser) -> Result<(), TokenStoreError>;

    /// Removes the stored session, if any.
    fn clear(&self);
}

/// In-memory session store, for tests and embedded use.
#[derive(Default)]
pub struct MemoryTokenStore {
    inner: Mutex<Option<AuthUser>>,
}

impl MemoryTokenStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<AuthUser> {
        let mut inner = self.inner.lock().unwrap();
        match &*inner {
            Some(user) if user.is_expired(Utc::now()) => {
                *inner = None;
                None
            }
            other => other.clone(),
        }
    }

    fn save(&self, user: &AuthUser) -> Result<(), TokenStoreError> {
        *self.inner.lock().unwrap() = Some(user.clone());
        Ok(())
    }

    fn clear(&self) {
        *self.inner.lock().unwrap() = None;
    }
}

/// JSON-file session store, the local-storage analog for native hosts.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store backed by the given file path.
    ///
    /// The file is only created on the first [`TokenStore::save`].
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<AuthUser> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return None,
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "failed to read session store");
                return None;
            }
        };

        let user: AuthUser = match serde_json::from_str(&raw) {
            Ok(user) => user,
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "corrupt session record, clearing");
                self.clear();
                return None;
            }
        };

        if user.is_expired(Utc::now()) {
            tracing::debug!(email = %user.email, "stored session expired, clearing");
            self.clear();
            return None;
        }

        Some(user)
    }

    fn save(&self, user: &AuthUser) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string(user)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    fn clear(&self) {
        if let Err(error) = std::fs::remove_file(&self.path) {
            if error.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %self.path.display(), %error, "failed to clear session store");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn user(expires_in: Duration) -> AuthUser {
        AuthUser {
            email: "user@example.org".to_string(),
            first_name: "Linh".to_string(),
            last_name: "Nguyen".to_string(),
            roles: vec!["User".to_string()],
            token: "jwt".to_string(),
            expires_at: Utc::now() + expires_in,
        }
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryTokenStore::new();
        assert!(store.load().is_none());

        store.save(&user(Duration::hours(1))).unwrap();
        assert_eq!(store.load().unwrap().email, "user@example.org");

        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_memory_store_discards_expired() {
        let store = MemoryTokenStore::new();
        store.save(&user(Duration::minutes(-5))).unwrap();
        assert!(store.load().is_none());
        // Expired record was also dropped from the store itself
        assert!(store.inner.lock().unwrap().is_none());
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("session.json"));

        assert!(store.load().is_none());
        store.save(&user(Duration::hours(1))).unwrap();
        assert_eq!(store.load().unwrap().token, "jwt");

        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_file_store_clears_corrupt_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileTokenStore::new(&path);
        assert!(store.load().is_none());
        assert!(!path.exists());
    }

    #[test]
    fn test_file_store_discards_expired() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = FileTokenStore::new(&path);

        store.save(&user(Duration::minutes(-5))).unwrap();
        assert!(store.load().is_none());
        assert!(!path.exists());
    }
}

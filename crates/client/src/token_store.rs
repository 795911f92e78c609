//! Bearer token persistence
//!
//! The token is process-wide mutable state with a single-writer
//! assumption (login and logout flows), so it lives behind an injectable
//! [`TokenStore`] service rather than a global. Every outgoing request
//! reads it; only the auth flows write it.

use std::sync::Mutex;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

/// Keychain entry name holding the raw token string.
const TOKEN_ACCOUNT: &str = "auth_token";

/// Errors from the underlying credential storage.
#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("credential storage access failed: {0}")]
    Access(String),
}

/// Storage for the single authentication token.
///
/// Invariant: at most one token at a time; [`TokenStore::save`]
/// overwrites any prior token, and absence of a token means the client is
/// unauthenticated.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Persists the token, replacing any existing one.
    async fn save(&self, token: &str) -> Result<(), TokenStoreError>;

    /// Returns the stored token, or `None` when logged out.
    async fn load(&self) -> Result<Option<String>, TokenStoreError>;

    /// Removes the stored token. Idempotent.
    async fn clear(&self) -> Result<(), TokenStoreError>;

    /// Whether a token is currently stored.
    async fn is_authenticated(&self) -> bool {
        matches!(self.load().await, Ok(Some(_)))
    }
}

/// Token store backed by the platform keychain (macOS Keychain, Windows
/// Credential Manager, Linux Secret Service).
pub struct KeyringTokenStore {
    service: String,
}

impl KeyringTokenStore {
    /// `service` is the keychain service name entries are filed under,
    /// e.g. `"ShareMyCard"`.
    pub fn new(service: impl Into<String>) -> Self {
        Self { service: service.into() }
    }

    fn entry(&self) -> Result<keyring::Entry, TokenStoreError> {
        keyring::Entry::new(&self.service, TOKEN_ACCOUNT)
            .map_err(|e| TokenStoreError::Access(format!("keyring error: {e}")))
    }
}

#[async_trait]
impl TokenStore for KeyringTokenStore {
    async fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        let entry = self.entry()?;
        // Delete-then-add keeps the entry attributes fresh even when a
        // stale credential exists.
        let _ = entry.delete_credential();
        entry
            .set_password(token)
            .map_err(|e| TokenStoreError::Access(format!("failed to store token: {e}")))?;
        debug!(service = %self.service, "auth token stored");
        Ok(())
    }

    async fn load(&self) -> Result<Option<String>, TokenStoreError> {
        let entry = self.entry()?;
        match entry.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(TokenStoreError::Access(format!("failed to load token: {e}"))),
        }
    }

    async fn clear(&self) -> Result<(), TokenStoreError> {
        let entry = self.entry()?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => {
                debug!(service = %self.service, "auth token cleared");
                Ok(())
            }
            Err(e) => Err(TokenStoreError::Access(format!("failed to delete token: {e}"))),
        }
    }
}

/// In-memory token store for tests and hosts without a keychain.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a token, for exercising authenticated
    /// paths in tests.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Mutex::new(Some(token.into())) }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        *self.token.lock().expect("token lock poisoned") = Some(token.to_string());
        Ok(())
    }

    async fn load(&self) -> Result<Option<String>, TokenStoreError> {
        Ok(self.token.lock().expect("token lock poisoned").clone())
    }

    async fn clear(&self) -> Result<(), TokenStoreError> {
        *self.token.lock().expect("token lock poisoned") = None;
        Ok(())
    }
}

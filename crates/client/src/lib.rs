//! # ShareMyCard Client
//!
//! Authenticated HTTP client for the ShareMyCard API.
//!
//! The crate is layered the same way the backend is:
//! - [`token_store`]: the bearer token, persisted in the platform
//!   keychain (or in memory for hosts without one)
//! - [`api::ApiClient`]: request construction, envelope decoding, and
//!   the error taxonomy shared by every endpoint
//! - resource clients ([`api::ContactsClient`], [`api::LeadsClient`],
//!   [`api::AuthClient`], [`api::CardsClient`], [`api::MediaClient`]):
//!   typed wrappers, one per endpoint family
//!
//! ```no_run
//! use std::sync::Arc;
//! use sharemycard_client::api::{ApiClient, AuthClient, ContactsClient};
//! use sharemycard_client::config::ApiConfig;
//! use sharemycard_client::token_store::KeyringTokenStore;
//!
//! # async fn run() -> Result<(), sharemycard_client::api::ApiError> {
//! let tokens = Arc::new(KeyringTokenStore::new("ShareMyCard"));
//! let api = Arc::new(ApiClient::new(ApiConfig::load(), tokens)?);
//!
//! let auth = AuthClient::new(api.clone());
//! auth.login("me@example.com", false).await?;
//! auth.verify("me@example.com", "123456").await?;
//!
//! let contacts = ContactsClient::new(api);
//! let all = contacts.list().await;
//! # let _ = all;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod token_store;

// Re-export commonly used items
pub use api::{
    ApiClient, ApiError, AuthClient, CardsClient, ContactsClient, LeadsClient, MediaClient, Result,
};
pub use config::ApiConfig;
pub use token_store::{KeyringTokenStore, MemoryTokenStore, TokenStore, TokenStoreError};

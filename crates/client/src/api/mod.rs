//! HTTP API surface
//!
//! [`ApiClient`] is the transport core: URL forming, auth header
//! injection, envelope decoding, and the shared error taxonomy. The
//! resource clients ([`AuthClient`], [`ContactsClient`], [`LeadsClient`],
//! [`CardsClient`], [`MediaClient`]) wrap it with typed per-endpoint
//! methods and hold no per-resource state, so they are cheap to construct
//! wherever a handle to the shared client exists.

pub mod auth;
pub mod cards;
pub mod client;
pub mod contacts;
pub mod errors;
pub mod leads;
pub mod media;

pub use auth::AuthClient;
pub use cards::CardsClient;
pub use client::ApiClient;
pub use contacts::ContactsClient;
pub use errors::{ApiError, Result};
pub use leads::LeadsClient;
pub use media::MediaClient;

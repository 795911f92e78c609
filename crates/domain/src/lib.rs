//! # ShareMyCard Domain
//!
//! Wire-level types for the ShareMyCard API.
//!
//! This crate contains:
//! - The response envelope every endpoint wraps its payload in
//! - Contact, lead, and business-card records with their wire field
//!   mappings (snake_case on the wire, plain names in memory)
//! - Authentication and media request/response payloads
//!
//! ## Architecture
//! - No dependencies on other ShareMyCard crates
//! - Only external dependencies allowed
//! - Pure data structures; the HTTP client lives in `sharemycard-client`

pub mod envelope;
pub mod types;

// Re-export commonly used items
pub use envelope::{Empty, Envelope};
pub use types::*;

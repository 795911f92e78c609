//! Response envelope shared by every ShareMyCard endpoint

use serde::Deserialize;

/// Standard wrapper around every API response body.
///
/// `data` may be absent even when `success` is true; acknowledgment-only
/// endpoints (delete, logout) return `{success, message}` with no payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
    /// Per-field validation errors, populated by some 4xx responses.
    pub errors: Option<Vec<String>>,
}

/// Placeholder payload for endpoints that acknowledge without data.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Empty {}

//! Authentication request and response payloads
//!
//! Login is passwordless by default: `/auth/login` emails a verification
//! code unless the account has a password set, and `/auth/verify` trades
//! the code (or password) for a bearer token.

use serde::{Deserialize, Serialize};

use super::wire;

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    #[serde(deserialize_with = "wire::id_string")]
    pub user_id: String,
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    /// Forces an email code even when the account has a password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_email_code: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(deserialize_with = "wire::id_string")]
    pub user_id: String,
    pub email: String,
    pub is_admin: bool,
    #[serde(default)]
    pub has_password: Option<bool>,
    #[serde(default)]
    pub verification_code_sent: Option<bool>,
}

/// Body for `/auth/verify`. Exactly one of `code` or `password` should be
/// set; the server rejects requests carrying both.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyRequest {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifyResponse {
    pub token: String,
    #[serde(deserialize_with = "wire::id_string")]
    pub user_id: String,
    pub email: String,
    pub is_admin: bool,
    pub is_active: bool,
    /// Seconds until the issued token expires.
    pub token_expires_in: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SetPasswordRequest {
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordCompleteRequest {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PasswordStatus {
    pub has_password: bool,
}

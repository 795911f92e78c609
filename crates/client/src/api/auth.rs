//! Authentication flows
//!
//! Login is passwordless by default: the server emails a one-time code,
//! and [`AuthClient::verify`] exchanges it for a bearer token. Accounts
//! that have set a password can instead verify with it directly. The
//! token lands in the client's [`TokenStore`](crate::TokenStore); a
//! failed save is logged but does not fail the flow, since the session
//! is already established server-side.

use std::sync::Arc;

use sharemycard_domain::{
    ChangePasswordRequest, Empty, LoginRequest, LoginResponse, PasswordStatus, RegisterRequest,
    RegisterResponse, ResetPasswordCompleteRequest, ResetPasswordRequest, SetPasswordRequest,
    VerifyRequest, VerifyResponse,
};
use tracing::{info, warn};

use crate::api::client::ApiClient;
use crate::api::errors::{ApiError, Result};
use crate::config::endpoints;

pub struct AuthClient {
    api: Arc<ApiClient>,
}

impl AuthClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Creates an account. The server sends a verification code to the
    /// given email as part of registration.
    pub async fn register(&self, email: &str) -> Result<RegisterResponse> {
        let body = RegisterRequest { email: email.to_string() };
        let envelope = self.api.post(endpoints::REGISTER, &body).await?;
        envelope
            .data
            .ok_or_else(|| ApiError::Server("registration returned no account data".into()))
    }

    /// Starts a login. When `force_email_code` is false and the account
    /// has a password, the response's `has_password` lets the caller
    /// offer a password prompt instead of waiting for the emailed code.
    pub async fn login(&self, email: &str, force_email_code: bool) -> Result<LoginResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            force_email_code: force_email_code.then_some(true),
        };
        let envelope = self.api.post(endpoints::LOGIN, &body).await?;
        envelope
            .data
            .ok_or_else(|| ApiError::Server("login returned no session data".into()))
    }

    /// Exchanges an emailed verification code for a bearer token and
    /// stores it.
    pub async fn verify(&self, email: &str, code: &str) -> Result<VerifyResponse> {
        self.verify_request(VerifyRequest {
            email: email.to_string(),
            code: Some(code.to_string()),
            password: None,
        })
        .await
    }

    /// Password variant of [`AuthClient::verify`], for accounts that
    /// have set one.
    pub async fn verify_with_password(&self, email: &str, password: &str) -> Result<VerifyResponse> {
        self.verify_request(VerifyRequest {
            email: email.to_string(),
            code: None,
            password: Some(password.to_string()),
        })
        .await
    }

    async fn verify_request(&self, body: VerifyRequest) -> Result<VerifyResponse> {
        let envelope = self.api.post(endpoints::VERIFY, &body).await?;
        let response: VerifyResponse = envelope
            .data
            .ok_or_else(|| ApiError::Server("verification returned no token".into()))?;

        if let Err(e) = self.api.tokens().save(&response.token).await {
            warn!(error = %e, "token obtained but could not be persisted");
        } else {
            info!(user_id = %response.user_id, "authenticated");
        }
        Ok(response)
    }

    /// Drops the local session. No server call is made; the token is
    /// simply discarded.
    pub async fn logout(&self) -> Result<()> {
        self.api
            .tokens()
            .clear()
            .await
            .map_err(|e| ApiError::Config(format!("failed to clear token: {e}")))
    }

    pub async fn is_authenticated(&self) -> bool {
        self.api.tokens().is_authenticated().await
    }

    /// Sets a password on a passwordless account, enabling
    /// [`AuthClient::verify_with_password`] for future logins.
    pub async fn set_password(&self, password: &str) -> Result<()> {
        let body = SetPasswordRequest { password: password.to_string() };
        self.api.post::<_, Empty>(endpoints::SET_PASSWORD, &body).await?;
        Ok(())
    }

    pub async fn change_password(&self, current: &str, new: &str) -> Result<()> {
        let body = ChangePasswordRequest {
            current_password: current.to_string(),
            new_password: new.to_string(),
        };
        self.api.post::<_, Empty>(endpoints::CHANGE_PASSWORD, &body).await?;
        Ok(())
    }

    /// Requests a password reset code by email.
    pub async fn reset_password_request(&self, email: &str) -> Result<()> {
        let body = ResetPasswordRequest { email: email.to_string() };
        self.api
            .post::<_, Empty>(endpoints::RESET_PASSWORD_REQUEST, &body)
            .await?;
        Ok(())
    }

    /// Completes a password reset with the emailed code.
    pub async fn reset_password_complete(&self, email: &str, code: &str, new_password: &str) -> Result<()> {
        let body = ResetPasswordCompleteRequest {
            email: email.to_string(),
            code: code.to_string(),
            new_password: new_password.to_string(),
        };
        self.api
            .post::<_, Empty>(endpoints::RESET_PASSWORD_COMPLETE, &body)
            .await?;
        Ok(())
    }

    /// Whether the authenticated account has a password set. The server
    /// identifies the account from the bearer token.
    pub async fn check_password_status(&self) -> Result<PasswordStatus> {
        let envelope = self.api.get(endpoints::CHECK_PASSWORD_STATUS).await?;
        envelope
            .data
            .ok_or_else(|| ApiError::Server("password status check returned no data".into()))
    }
}

//! Core HTTP transport

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sharemycard_domain::Envelope;
use tracing::{debug, warn};

use crate::api::errors::{ApiError, Result};
use crate::config::ApiConfig;
use crate::token_store::TokenStore;

const USER_AGENT: &str = concat!("ShareMyCard-Rust/", env!("CARGO_PKG_VERSION"));

/// Shared transport for all API operations.
///
/// Each call performs exactly one network round trip: no retries, no
/// redirect-driven re-auth. Auth state lives in the injected
/// [`TokenStore`]; when a token is present it is attached as a bearer
/// header, and a 401 response clears it as a side effect.
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, tokens: Arc<dyn TokenStore>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("X-App-Platform", HeaderValue::from_static("rust"));

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Config(format!("failed to build http client: {e}")))?;

        Ok(Self { http, config, tokens })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// Sends a JSON request and decodes the standard response envelope.
    ///
    /// A `success: false` envelope becomes [`ApiError::Server`] carrying
    /// the server's message, even under a 2xx status.
    pub async fn request<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Envelope<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let bytes = self.execute(method, path, body).await?;
        let envelope: Envelope<T> = serde_json::from_slice(&bytes)?;
        if !envelope.success {
            return Err(ApiError::Server(envelope.message));
        }
        Ok(envelope)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>> {
        self.request::<(), T>(Method::GET, path, None).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<Envelope<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<Envelope<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::PUT, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>> {
        self.request::<(), T>(Method::DELETE, path, None).await
    }

    /// Sends a multipart form under the longer upload timeout and decodes
    /// the response envelope.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Envelope<T>> {
        let url = self.url(path);
        debug!(%url, "POST multipart");

        let response = self
            .http
            .post(&url)
            .timeout(self.config.upload_timeout)
            .headers(self.auth_headers().await)
            .multipart(form)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(ApiError::from_transport)?;
        self.check_status(status, &bytes).await?;

        let envelope: Envelope<T> = serde_json::from_slice(&bytes)?;
        if !envelope.success {
            return Err(ApiError::Server(envelope.message));
        }
        Ok(envelope)
    }

    /// GET returning the raw body, for binary endpoints (images, QR
    /// codes). Status handling matches [`ApiClient::request`] but no
    /// envelope is expected.
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let bytes = self.execute::<()>(Method::GET, path, None).await?;
        Ok(bytes)
    }

    async fn execute<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Vec<u8>>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!(%method, %url, "sending api request");

        let mut request = self.http.request(method, &url).headers(self.auth_headers().await);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::from_transport)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(ApiError::from_transport)?;
        self.check_status(status, &bytes).await?;
        Ok(bytes.to_vec())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    async fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let token = match self.tokens.load().await {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "token store read failed, sending unauthenticated");
                None
            }
        };
        if let Some(token) = token {
            match HeaderValue::from_str(&format!("Bearer {token}")) {
                Ok(value) => {
                    headers.insert(reqwest::header::AUTHORIZATION, value);
                }
                Err(_) => warn!("stored token contains invalid header characters, skipping"),
            }
        }
        headers
    }

    /// Turns a non-2xx status into [`ApiError::Server`], preferring the
    /// envelope message when the body carries one. A 401 additionally
    /// clears the stored token: the session is over regardless of what
    /// the caller does next.
    async fn check_status(&self, status: StatusCode, body: &[u8]) -> Result<()> {
        if status.is_success() {
            return Ok(());
        }
        if status == StatusCode::UNAUTHORIZED {
            warn!("received 401, clearing stored token");
            if let Err(e) = self.tokens.clear().await {
                warn!(error = %e, "failed to clear token after 401");
            }
        }
        Err(ApiError::Server(extract_server_message(status, body)))
    }
}

fn extract_server_message(status: StatusCode, body: &[u8]) -> String {
    if let Ok(envelope) = serde_json::from_slice::<Envelope<serde_json::Value>>(body) {
        if !envelope.message.is_empty() {
            return envelope.message;
        }
    }
    format!("server returned status {status}")
}

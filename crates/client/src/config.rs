//! Client configuration
//!
//! Defaults target the production origin; `SHAREMYCARD_*` environment
//! variables override individual fields, and [`ApiConfig::load_from_file`]
//! reads a JSON or TOML file for hosts that ship a config alongside the
//! binary.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::api::ApiError;

/// Production API origin; every endpoint path is relative to this.
pub const DEFAULT_BASE_URL: &str = "https://sharemycard.app/api";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_UPLOAD_TIMEOUT_SECS: u64 = 60;

/// Endpoint paths, relative to the base URL.
pub mod endpoints {
    // Authentication
    pub const REGISTER: &str = "/auth/register";
    pub const LOGIN: &str = "/auth/login";
    pub const VERIFY: &str = "/auth/verify";
    pub const SET_PASSWORD: &str = "/auth/set-password";
    pub const CHANGE_PASSWORD: &str = "/auth/change-password";
    pub const RESET_PASSWORD_REQUEST: &str = "/auth/reset-password-request";
    pub const RESET_PASSWORD_COMPLETE: &str = "/auth/reset-password-complete";
    pub const CHECK_PASSWORD_STATUS: &str = "/auth/check-password-status";

    // Business cards
    pub const CARDS: &str = "/cards/";
    pub const QR_CODE: &str = "/cards/qrcode";

    // Contacts and leads
    pub const CONTACTS: &str = "/contacts/";
    pub const LEADS: &str = "/leads/";
    pub const CONVERT_LEAD: &str = "/leads/convert";

    // Media
    pub const MEDIA_UPLOAD: &str = "/media/upload";
    pub const MEDIA_VIEW: &str = "/media/view";
    pub const MEDIA_DELETE: &str = "/media/delete";
}

/// Configuration for [`crate::api::ApiClient`].
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL for the API (no trailing slash).
    pub base_url: String,
    /// Timeout applied to every request.
    pub timeout: Duration,
    /// Longer timeout for media uploads.
    pub upload_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            upload_timeout: Duration::from_secs(DEFAULT_UPLOAD_TIMEOUT_SECS),
        }
    }
}

/// On-disk representation; every field optional so partial files work.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
    upload_timeout_secs: Option<u64>,
}

impl ApiConfig {
    /// Load configuration: defaults overlaid with any `SHAREMYCARD_*`
    /// environment variables that are set.
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("SHAREMYCARD_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(secs) = env_secs("SHAREMYCARD_TIMEOUT_SECS") {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = env_secs("SHAREMYCARD_UPLOAD_TIMEOUT_SECS") {
            config.upload_timeout = Duration::from_secs(secs);
        }

        tracing::debug!(base_url = %config.base_url, "configuration loaded");
        config
    }

    /// Load configuration from a JSON or TOML file, chosen by extension.
    /// Missing fields fall back to the defaults.
    pub fn load_from_file(path: &Path) -> Result<Self, ApiError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ApiError::Config(format!("failed to read {}: {e}", path.display())))?;

        let file: FileConfig = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&raw)
                .map_err(|e| ApiError::Config(format!("invalid TOML config: {e}")))?,
            Some("json") => serde_json::from_str(&raw)
                .map_err(|e| ApiError::Config(format!("invalid JSON config: {e}")))?,
            other => {
                return Err(ApiError::Config(format!(
                    "unsupported config extension: {other:?} (expected .json or .toml)"
                )))
            }
        };

        let defaults = Self::default();
        Ok(Self {
            base_url: file
                .base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            timeout: file.timeout_secs.map_or(defaults.timeout, Duration::from_secs),
            upload_timeout: file
                .upload_timeout_secs
                .map_or(defaults.upload_timeout, Duration::from_secs),
        })
    }

    /// Config pointed at an arbitrary origin; handy for tests and staging.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }
}

fn env_secs(name: &str) -> Option<u64> {
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(secs) => Some(secs),
        Err(err) => {
            tracing::warn!(%name, %raw, %err, "ignoring unparseable duration override");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_match_production() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "https://sharemycard.app/api");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.upload_timeout, Duration::from_secs(60));
    }

    #[test]
    fn with_base_url_strips_trailing_slash() {
        let config = ApiConfig::with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn loads_partial_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "base_url = \"http://localhost:9000/\"").unwrap();
        writeln!(file, "timeout_secs = 5").unwrap();

        let config = ApiConfig::load_from_file(&path).unwrap();
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout, Duration::from_secs(5));
        // Unset fields keep their defaults
        assert_eq!(config.upload_timeout, Duration::from_secs(60));
    }

    #[test]
    fn loads_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"upload_timeout_secs": 120}"#).unwrap();

        let config = ApiConfig::load_from_file(&path).unwrap();
        assert_eq!(config.base_url, "https://sharemycard.app/api");
        assert_eq!(config.upload_timeout, Duration::from_secs(120));
    }

    #[test]
    fn rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "base_url: nope").unwrap();

        let err = ApiConfig::load_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("unsupported config extension"));
    }
}

//! Contact records synced from the server
//!
//! Wire keys are snake_case and differ from the in-memory names for a few
//! fields (`organization_name` ↔ `company`, `email_primary` ↔ `email`);
//! the rename table below is the single source of truth for the mapping.

use serde::{Deserialize, Serialize};

use super::wire;

/// A contact as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    #[serde(deserialize_with = "wire::id_string")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "email_primary")]
    pub email: Option<String>,
    #[serde(rename = "mobile_phone")]
    pub phone: Option<String>,
    #[serde(rename = "organization_name")]
    pub company: Option<String>,
    pub job_title: Option<String>,
    #[serde(rename = "street_address")]
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    #[serde(rename = "website_url")]
    pub website: Option<String>,
    #[serde(rename = "comments_from_lead")]
    pub notes: Option<String>,
    pub source: Option<String>,
    pub source_metadata: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Write-only projection of [`Contact`] used for create and update
/// payloads. Carries no id and no timestamps; the server assigns both.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContactCreateData {
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "email_primary", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "mobile_phone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "organization_name", skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(rename = "street_address", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(rename = "website_url", skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(rename = "comments_from_lead", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_metadata: Option<String>,
}

impl Contact {
    /// First and last name joined, trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    /// Name to show in a list; falls back to the email for contacts with
    /// no name at all.
    pub fn display_name(&self) -> String {
        let full = self.full_name();
        if full.is_empty() {
            self.email.clone().unwrap_or_else(|| "Unknown Contact".to_string())
        } else {
            full
        }
    }
}

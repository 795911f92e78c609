//! Leads captured from scanned cards and custom QR codes

use serde::{Deserialize, Serialize};

use super::wire;

/// A lead as returned by `/leads/`. Includes joined business-card and
/// QR-code columns so the app can show where the lead came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    /// Server-assigned id; the backend returns it as a string or an
    /// integer depending on the endpoint.
    #[serde(deserialize_with = "wire::id_string")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: Option<String>,
    #[serde(rename = "email_primary")]
    pub email: Option<String>,
    pub work_phone: Option<String>,
    pub mobile_phone: Option<String>,
    #[serde(rename = "street_address")]
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    #[serde(rename = "organization_name")]
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub birthdate: Option<String>,
    #[serde(rename = "website_url")]
    pub website: Option<String>,
    pub photo_url: Option<String>,
    #[serde(rename = "comments_from_lead")]
    pub comments: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,

    // Business card columns joined onto the lead row
    pub card_first_name: Option<String>,
    pub card_last_name: Option<String>,
    pub card_company: Option<String>,
    pub card_job_title: Option<String>,

    // Custom QR code columns joined onto the lead row
    pub qr_title: Option<String>,
    pub qr_type: Option<String>,

    /// "new" or "converted"
    pub status: Option<String>,
}

impl Lead {
    pub fn display_name(&self) -> String {
        if let Some(full) = self.full_name.as_deref() {
            if !full.is_empty() {
                return full.to_string();
            }
        }
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    pub fn is_converted(&self) -> bool {
        self.status.as_deref() == Some("converted")
    }

    /// Label for the card or QR code this lead was captured through.
    pub fn card_display_name(&self) -> String {
        if let (Some(first), Some(last)) = (&self.card_first_name, &self.card_last_name) {
            return format!("{first} {last}");
        }

        match (self.qr_title.as_deref(), self.qr_type.as_deref()) {
            (Some(title), qr_type) if !title.is_empty() => {
                let label = qr_type.map_or_else(|| "Custom".to_string(), capitalize);
                format!("QR {label}: {title}")
            }
            (_, Some(qr_type)) => format!("QR {}", capitalize(qr_type)),
            _ => "Unknown Card".to_string(),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

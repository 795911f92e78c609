//! Business card records

use serde::{Deserialize, Serialize};

use super::wire;

/// A business card with its nested contact channels.
///
/// `id` is absent on cards that have not been pushed to the server yet;
/// the create endpoint echoes the card back with an id assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub company_name: Option<String>,
    pub job_title: Option<String>,
    pub bio: Option<String>,
    pub profile_photo_path: Option<String>,
    pub company_logo_path: Option<String>,
    pub cover_graphic_path: Option<String>,
    pub theme: Option<String>,
    #[serde(default)]
    pub emails: Vec<CardEmail>,
    #[serde(default)]
    pub phones: Vec<CardPhone>,
    #[serde(default)]
    pub websites: Vec<CardWebsite>,
    pub address: Option<CardAddress>,
    /// Bool on the wire for fresh rows, "1"/"0" strings for legacy ones.
    #[serde(default, deserialize_with = "wire::opt_flag")]
    pub is_active: Option<bool>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardEmail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub email: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub label: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_flag")]
    pub is_primary: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardPhone {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub phone_number: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardWebsite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub url: String,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_flag")]
    pub is_primary: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
}

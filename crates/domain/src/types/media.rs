//! Media upload payloads

use serde::Deserialize;

/// Response from `/media/upload`.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaUpload {
    pub filename: String,
    pub path: String,
    pub url: String,
}

/// Media type labels accepted by the upload endpoint.
pub mod media_type {
    pub const PROFILE_PHOTO: &str = "profile_photo";
    pub const COMPANY_LOGO: &str = "company_logo";
    pub const COVER_GRAPHIC: &str = "cover_graphic";

    pub const ALL: [&str; 3] = [PROFILE_PHOTO, COMPANY_LOGO, COVER_GRAPHIC];
}

//! Card media upload, download, and deletion
//!
//! Uploads go as multipart forms under the longer upload timeout. Media
//! deletion is a `POST` with the filename in the body; the server does
//! not route `DELETE` for media.

use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use serde_json::json;
use sharemycard_domain::{media_type, Empty, MediaUpload};

use crate::api::client::ApiClient;
use crate::api::errors::{ApiError, Result};
use crate::config::endpoints;

pub struct MediaClient {
    api: Arc<ApiClient>,
}

impl MediaClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Uploads JPEG image bytes for a card slot. `media_type` is one of
    /// the [`media_type`] constants.
    pub async fn upload(
        &self,
        image: Vec<u8>,
        media_type: &str,
        business_card_id: &str,
    ) -> Result<MediaUpload> {
        if !media_type::ALL.contains(&media_type) {
            return Err(ApiError::Config(format!("unknown media type: {media_type}")));
        }

        let part = Part::bytes(image)
            .file_name("image.jpg")
            .mime_str("image/jpeg")
            .map_err(|e| ApiError::Config(format!("invalid mime type: {e}")))?;
        let form = Form::new()
            .text("business_card_id", business_card_id.to_string())
            .text("media_type", media_type.to_string())
            .part("file", part);

        let envelope = self
            .api
            .post_multipart::<MediaUpload>(endpoints::MEDIA_UPLOAD, form)
            .await?;
        envelope
            .data
            .ok_or_else(|| ApiError::Server("upload returned no file info".into()))
    }

    /// Downloads a previously uploaded file by its server-side filename.
    pub async fn download(&self, filename: &str) -> Result<Vec<u8>> {
        let path = format!(
            "{}?filename={}",
            endpoints::MEDIA_VIEW,
            urlencoding::encode(filename)
        );
        self.api.get_bytes(&path).await
    }

    pub async fn delete(&self, filename: &str) -> Result<()> {
        let body = json!({ "filename": filename });
        self.api
            .post::<_, Empty>(endpoints::MEDIA_DELETE, &body)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::token_store::MemoryTokenStore;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn media(server: &MockServer) -> MediaClient {
        let api = ApiClient::new(
            ApiConfig::with_base_url(server.uri()),
            Arc::new(MemoryTokenStore::with_token("jwt")),
        )
        .unwrap();
        MediaClient::new(Arc::new(api))
    }

    #[tokio::test]
    async fn upload_sends_multipart_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/media/upload"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true, "message": "uploaded",
                "data": {
                    "filename": "c1_profile.jpg",
                    "path": "/uploads/c1_profile.jpg",
                    "url": "https://sharemycard.app/uploads/c1_profile.jpg"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let upload = media(&server)
            .upload(vec![0xff, 0xd8, 0xff], media_type::PROFILE_PHOTO, "c1")
            .await
            .unwrap();
        assert_eq!(upload.filename, "c1_profile.jpg");

        let requests = server.received_requests().await.unwrap();
        let content_type = requests[0].headers.get("content-type").unwrap();
        assert!(content_type
            .to_str()
            .unwrap()
            .starts_with("multipart/form-data"));

        let body = String::from_utf8_lossy(&requests[0].body);
        assert!(body.contains("name=\"business_card_id\""));
        assert!(body.contains("name=\"media_type\""));
        assert!(body.contains("name=\"file\""));
        assert!(body.contains(media_type::PROFILE_PHOTO));
    }

    #[tokio::test]
    async fn upload_rejects_unknown_media_type() {
        let server = MockServer::start().await;
        let err = media(&server)
            .upload(vec![0xff], "banner", "c1")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn download_requests_file_by_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/media/view"))
            .and(query_param("filename", "c1 photo.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xff, 0xd8]))
            .expect(1)
            .mount(&server)
            .await;

        let bytes = media(&server).download("c1 photo.jpg").await.unwrap();
        assert_eq!(bytes, vec![0xff, 0xd8]);
    }

    #[tokio::test]
    async fn delete_posts_filename_in_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/media/delete"))
            .and(body_json(serde_json::json!({"filename": "c1_profile.jpg"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true, "message": "deleted", "data": null
            })))
            .expect(1)
            .mount(&server)
            .await;

        media(&server).delete("c1_profile.jpg").await.unwrap();
    }
}

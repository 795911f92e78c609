//! Business cards resource client
//!
//! Card item operations address the record with an `?id=` query
//! parameter rather than a path segment, matching the server's routing.

use std::sync::Arc;

use sharemycard_domain::{BusinessCard, Empty};

use crate::api::client::ApiClient;
use crate::api::errors::{ApiError, Result};
use crate::config::endpoints;

pub struct CardsClient {
    api: Arc<ApiClient>,
}

impl CardsClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Fetches all cards owned by the authenticated user.
    pub async fn list(&self) -> Result<Vec<BusinessCard>> {
        let envelope = self.api.get(endpoints::CARDS).await?;
        Ok(envelope.data.unwrap_or_default())
    }

    pub async fn get(&self, id: &str) -> Result<BusinessCard> {
        let path = format!("{}?id={}", endpoints::CARDS, urlencoding::encode(id));
        let envelope = self.api.get(&path).await?;
        envelope
            .data
            .ok_or_else(|| ApiError::Server(format!("card {id} not found")))
    }

    /// Pushes an unsaved card to the server and returns the echoed card
    /// with its assigned id.
    pub async fn create(&self, card: &BusinessCard) -> Result<BusinessCard> {
        let envelope = self.api.post(endpoints::CARDS, card).await?;
        envelope
            .data
            .ok_or_else(|| ApiError::Server("failed to create card".into()))
    }

    /// Updates a saved card. The card must carry its server id.
    pub async fn update(&self, card: &BusinessCard) -> Result<BusinessCard> {
        let id = card
            .id
            .as_deref()
            .ok_or_else(|| ApiError::Config("cannot update a card without an id".into()))?;
        let path = format!("{}?id={}", endpoints::CARDS, urlencoding::encode(id));
        let envelope = self.api.put(&path, card).await?;
        envelope
            .data
            .ok_or_else(|| ApiError::Server(envelope.message))
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let path = format!("{}?id={}", endpoints::CARDS, urlencoding::encode(id));
        self.api.delete::<Empty>(&path).await?;
        Ok(())
    }

    /// Fetches the card's QR code as PNG bytes. `size` is the square
    /// pixel dimension.
    pub async fn qr_code(&self, card_id: &str, size: u32) -> Result<Vec<u8>> {
        let path = format!(
            "{}?id={}&format=image&size={}",
            endpoints::QR_CODE,
            urlencoding::encode(card_id),
            size
        );
        self.api.get_bytes(&path).await
    }
}

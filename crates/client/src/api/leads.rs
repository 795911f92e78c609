//! Leads resource client
//!
//! Unlike contacts, a failed lead list fetch propagates to the caller:
//! leads are captured data the user cannot re-enter, so silently showing
//! an empty list would read as data loss. Cancellation is the one
//! exception and is re-raised without logging.

use std::sync::Arc;

use serde_json::{json, Value};
use sharemycard_domain::{Empty, Lead};
use tracing::warn;

use crate::api::client::ApiClient;
use crate::api::errors::{ApiError, Result};
use crate::config::endpoints;

pub struct LeadsClient {
    api: Arc<ApiClient>,
}

impl LeadsClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Fetches all leads for the authenticated user. Errors propagate;
    /// only cancellations pass through unlogged.
    pub async fn list(&self) -> Result<Vec<Lead>> {
        match self.api.get::<Vec<Lead>>(endpoints::LEADS).await {
            Ok(envelope) => Ok(envelope.data.unwrap_or_default()),
            Err(err) => {
                if !err.is_cancelled() {
                    warn!(error = %err, "lead list fetch failed");
                }
                Err(err)
            }
        }
    }

    pub async fn get(&self, id: &str) -> Result<Lead> {
        let path = format!("{}get.php?id={}", endpoints::LEADS, urlencoding::encode(id));
        let envelope = self.api.get(&path).await?;
        envelope
            .data
            .ok_or_else(|| ApiError::Server(format!("lead {id} not found")))
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let path = format!("{}{}", endpoints::LEADS, urlencoding::encode(id));
        self.api.delete::<Empty>(&path).await?;
        Ok(())
    }

    /// Converts a lead into a contact and returns the new contact's id.
    ///
    /// The server returns `contact_id` as a string or an integer
    /// depending on version; both normalize to a string here. Any other
    /// type is an error rather than a guess.
    pub async fn convert(&self, lead_id: &str) -> Result<String> {
        let body = json!({ "lead_id": lead_id });
        let envelope = self
            .api
            .post::<_, Value>(endpoints::CONVERT_LEAD, &body)
            .await?;

        let data = envelope
            .data
            .ok_or_else(|| ApiError::Server("conversion returned no data".into()))?;

        match data.get("contact_id") {
            Some(Value::String(id)) => Ok(id.clone()),
            Some(Value::Number(id)) => Ok(id.to_string()),
            _ => Err(ApiError::IdTypeMismatch("contact_id")),
        }
    }
}

//! Contacts resource client
//!
//! Two behaviors here are deliberate and load-bearing for callers:
//!
//! * [`ContactsClient::list`] never fails. A contact list that cannot be
//!   fetched renders as empty rather than blocking the caller's screen,
//!   so every error degrades to `vec![]`.
//! * [`ContactsClient::update`] tolerates servers that acknowledge an
//!   update without echoing the full record. When the `PUT` response
//!   carries no decodable contact, one follow-up `GET` fetches the
//!   updated state. Never more than one.

use std::sync::Arc;

use serde::Serialize;
use sharemycard_domain::{Contact, ContactCreateData, Empty, Envelope};
use tracing::warn;

use crate::api::client::ApiClient;
use crate::api::errors::{ApiError, Result};
use crate::config::endpoints;

pub struct ContactsClient {
    api: Arc<ApiClient>,
}

/// Update body: the contact id travels in the body, not the URL path.
#[derive(Serialize)]
struct ContactUpdateBody<'a> {
    id: &'a str,
    #[serde(flatten)]
    data: &'a ContactCreateData,
}

impl ContactsClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Fetches all contacts, degrading to an empty list on any failure.
    pub async fn list(&self) -> Vec<Contact> {
        match self.api.get::<Vec<Contact>>(endpoints::CONTACTS).await {
            Ok(envelope) => envelope.data.unwrap_or_default(),
            Err(err) => {
                if !err.is_cancelled() {
                    warn!(error = %err, "contact list fetch failed, showing empty list");
                }
                Vec::new()
            }
        }
    }

    pub async fn get(&self, id: &str) -> Result<Contact> {
        let path = format!("{}{}", endpoints::CONTACTS, urlencoding::encode(id));
        let envelope = self.api.get(&path).await?;
        envelope
            .data
            .ok_or_else(|| ApiError::Server(format!("contact {id} not found")))
    }

    pub async fn create(&self, data: &ContactCreateData) -> Result<Contact> {
        let envelope = self.api.post(endpoints::CONTACTS, data).await?;
        envelope
            .data
            .ok_or_else(|| ApiError::Server("no data returned from server".into()))
    }

    /// Updates a contact and returns its post-update state.
    ///
    /// Exactly one `PUT` is sent. If its response body already contains
    /// the updated contact it is returned directly; otherwise exactly one
    /// `GET` refetches it. A refetch failure after a confirmed update is
    /// reported as a server error, not retried.
    pub async fn update(&self, id: &str, data: &ContactCreateData) -> Result<Contact> {
        let body = ContactUpdateBody { id, data };
        let envelope: Envelope<serde_json::Value> =
            self.api.put(endpoints::CONTACTS, &body).await?;

        if let Some(value) = envelope.data {
            if let Ok(contact) = serde_json::from_value::<Contact>(value) {
                return Ok(contact);
            }
        }

        // Update confirmed but no usable record in the response.
        self.get(id).await.map_err(|err| {
            ApiError::Server(format!("update confirmed but refetch failed: {err}"))
        })
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let path = format!("{}{}", endpoints::CONTACTS, urlencoding::encode(id));
        self.api.delete::<Empty>(&path).await?;
        Ok(())
    }

    /// Server-side search. The query is percent-encoded before it joins
    /// the URL.
    pub async fn search(&self, query: &str) -> Result<Vec<Contact>> {
        let path = format!("{}search?q={}", endpoints::CONTACTS, urlencoding::encode(query));
        let envelope = self.api.get(&path).await?;
        Ok(envelope.data.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::token_store::MemoryTokenStore;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn contacts(server: &MockServer) -> ContactsClient {
        let api = ApiClient::new(
            ApiConfig::with_base_url(server.uri()),
            Arc::new(MemoryTokenStore::with_token("jwt")),
        )
        .unwrap();
        ContactsClient::new(Arc::new(api))
    }

    fn contact_json(id: &str, first: &str) -> serde_json::Value {
        json!({
            "id": id,
            "first_name": first,
            "last_name": "Lovelace",
            "created_at": "2026-01-01 10:00:00",
            "updated_at": "2026-01-02 10:00:00"
        })
    }

    #[tokio::test]
    async fn list_returns_contacts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/contacts/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true, "message": "",
                "data": [contact_json("1", "Ada"), contact_json("2", "Grace")]
            })))
            .mount(&server)
            .await;

        let result = contacts(&server).list().await;
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].first_name, "Ada");
    }

    #[tokio::test]
    async fn list_degrades_to_empty_on_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/contacts/"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "success": false, "message": "database unavailable"
            })))
            .mount(&server)
            .await;

        assert!(contacts(&server).list().await.is_empty());
    }

    #[tokio::test]
    async fn list_degrades_to_empty_when_unreachable() {
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let api = ApiClient::new(
            ApiConfig::with_base_url(uri),
            Arc::new(MemoryTokenStore::new()),
        )
        .unwrap();
        assert!(ContactsClient::new(Arc::new(api)).list().await.is_empty());
    }

    #[tokio::test]
    async fn create_returns_new_contact() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/contacts/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true, "message": "created",
                "data": contact_json("9", "Ada")
            })))
            .mount(&server)
            .await;

        let data = ContactCreateData {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            ..Default::default()
        };
        let contact = contacts(&server).create(&data).await.unwrap();
        assert_eq!(contact.id, "9");
    }

    #[tokio::test]
    async fn create_without_data_is_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/contacts/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true, "message": "created", "data": null
            })))
            .mount(&server)
            .await;

        let err = contacts(&server)
            .create(&ContactCreateData::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Server(_)));
    }

    #[tokio::test]
    async fn update_sends_id_in_body_and_uses_echoed_contact() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/contacts/"))
            .and(body_json(json!({"id": "5", "first_name": "Ada", "last_name": "Lovelace"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true, "message": "updated",
                "data": contact_json("5", "Ada")
            })))
            .expect(1)
            .mount(&server)
            .await;
        // No refetch when the response already carries the record.
        Mock::given(method("GET"))
            .and(path("/contacts/5"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let data = ContactCreateData {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            ..Default::default()
        };
        let contact = contacts(&server).update("5", &data).await.unwrap();
        assert_eq!(contact.id, "5");
    }

    #[tokio::test]
    async fn update_refetches_once_when_response_has_no_record() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/contacts/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true, "message": "updated", "data": {"updated": true}
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/contacts/5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true, "message": "",
                "data": contact_json("5", "Ada")
            })))
            .expect(1)
            .mount(&server)
            .await;

        let contact = contacts(&server)
            .update("5", &ContactCreateData::default())
            .await
            .unwrap();
        assert_eq!(contact.id, "5");
    }

    #[tokio::test]
    async fn update_refetch_failure_is_reported_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/contacts/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true, "message": "updated", "data": null
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/contacts/5"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "success": false, "message": "read failed"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = contacts(&server)
            .update("5", &ContactCreateData::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Server(msg) if msg.contains("refetch failed")));
    }

    #[tokio::test]
    async fn delete_targets_contact_path() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/contacts/5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true, "message": "deleted", "data": null
            })))
            .expect(1)
            .mount(&server)
            .await;

        contacts(&server).delete("5").await.unwrap();
    }

    #[tokio::test]
    async fn search_percent_encodes_the_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/contacts/search"))
            .and(query_param("q", "O'Brien & Co"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true, "message": "",
                "data": [contact_json("3", "Miriam")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = contacts(&server).search("O'Brien & Co").await.unwrap();
        assert_eq!(result.len(), 1);
    }
}

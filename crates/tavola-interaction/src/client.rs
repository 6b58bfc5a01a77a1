//! HttpApiClient - REST implementation of the Tavola gateways.
//!
//! One client serves all three backends (chat, reservations, search) since
//! they share a base URL. Requests are sent once and never retried.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tavola_core::TavolaError;
use tavola_core::chat::{ChatGateway, ChatReply, ChatRequest};
use tavola_core::config::ClientConfig;
use tavola_core::error::Result;
use tavola_core::reservation::{Reservation, ReservationDraft, ReservationGateway, TimeWindow};
use tavola_core::search::{Restaurant, SearchFilters, SearchGateway};

const CHAT_PATH: &str = "/agents/chat";
const RESERVATIONS_PATH: &str = "/reservations";
const SEARCH_PATH: &str = "/search/advanced";

/// Gateway implementation that talks to the restaurant service over HTTP.
#[derive(Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: String,
}

impl HttpApiClient {
    /// Creates a client for the configured base URL and timeout.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| TavolaError::config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            base_url: config.api_root().to_string(),
        })
    }

    /// Overrides the base URL after construction.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends the request and rejects non-2xx responses.
    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request
            .send()
            .await
            .map_err(|err| TavolaError::transport(format!("Request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "Non-success response");
            return Err(TavolaError::http(status.as_u16(), body_text));
        }
        Ok(response)
    }

    /// Reads the body and decodes it as JSON.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = response
            .text()
            .await
            .map_err(|err| TavolaError::transport(format!("Failed to read response body: {err}")))?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ChatGateway for HttpApiClient {
    async fn send_chat(&self, request: ChatRequest) -> Result<ChatReply> {
        let url = self.url(CHAT_PATH);
        tracing::debug!(%url, has_context = request.context.is_some(), "POST chat");

        let response = self.send(self.client.post(&url).json(&request)).await?;
        Self::decode(response).await
    }
}

#[async_trait]
impl ReservationGateway for HttpApiClient {
    async fn list_reservations(
        &self,
        restaurant_id: i64,
        window: Option<&TimeWindow>,
    ) -> Result<Vec<Reservation>> {
        let url = self.url(&format!("{RESERVATIONS_PATH}/restaurant/{restaurant_id}"));
        tracing::debug!(%url, windowed = window.is_some(), "GET reservations");

        let mut request = self.client.get(&url);
        // Both bounds or neither.
        if let Some(window) = window {
            request = request.query(&[("start", &window.start), ("end", &window.end)]);
        }

        let response = self.send(request).await?;
        Self::decode(response).await
    }

    async fn create_reservation(&self, draft: &ReservationDraft) -> Result<()> {
        let url = self.url(RESERVATIONS_PATH);
        tracing::debug!(%url, restaurant_id = draft.restaurant_id, "POST reservation");

        self.send(self.client.post(&url).json(draft)).await?;
        tracing::info!(restaurant_id = draft.restaurant_id, "Reservation created");
        Ok(())
    }
}

#[async_trait]
impl SearchGateway for HttpApiClient {
    async fn search_restaurants(&self, filters: &SearchFilters) -> Result<Vec<Restaurant>> {
        let url = self.url(SEARCH_PATH);
        let query = filters.to_query_pairs();
        tracing::debug!(%url, filters = query.len(), "GET search");

        let response = self.send(self.client.get(&url).query(&query)).await?;
        Self::decode(response).await
    }
}

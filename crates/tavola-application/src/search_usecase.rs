//! Restaurant search use case.

use std::sync::Arc;

use tavola_core::error::SEARCH_FAILURE_MESSAGE;
use tavola_core::search::{Restaurant, SearchFilters, SearchGateway};

/// What the result list should show after a search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    pub restaurants: Vec<Restaurant>,
    /// User-facing error; set only when the search failed.
    pub error: Option<String>,
}

pub struct SearchUseCase {
    gateway: Arc<dyn SearchGateway>,
}

impl SearchUseCase {
    pub fn new(gateway: Arc<dyn SearchGateway>) -> Self {
        Self { gateway }
    }

    /// Runs a search; failures clear the list and carry the generic message.
    pub async fn search(&self, filters: &SearchFilters) -> SearchResults {
        match self.gateway.search_restaurants(filters).await {
            Ok(restaurants) => {
                tracing::debug!(count = restaurants.len(), "Search completed");
                SearchResults {
                    restaurants,
                    error: None,
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "Search failed");
                SearchResults {
                    restaurants: Vec::new(),
                    error: Some(SEARCH_FAILURE_MESSAGE.to_string()),
                }
            }
        }
    }
}

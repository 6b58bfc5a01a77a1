//! Search service trait definition.

use async_trait::async_trait;

use crate::error::Result;
use crate::search::model::{Restaurant, SearchFilters};

/// Runs restaurant searches against the backend.
#[async_trait]
pub trait SearchGateway: Send + Sync {
    /// Executes a search with the given filters.
    ///
    /// # Returns
    /// The matching restaurants, in the order the server ranked them.
    async fn search_restaurants(&self, filters: &SearchFilters) -> Result<Vec<Restaurant>>;
}

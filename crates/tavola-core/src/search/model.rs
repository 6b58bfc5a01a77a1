//! Search domain models.

use serde::{Deserialize, Serialize};

/// Filters for the advanced search endpoint.
///
/// `SearchFilters::default()` is the unfiltered "reset" search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Restaurant name fragment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Minimum rating (1-5)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u32>,

    /// Maximum distance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<u32>,

    /// Maximum price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,

    /// Cuisine name fragment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,

    /// Maximum number of results to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl SearchFilters {
    /// Query parameters for the filters that are actually set.
    ///
    /// `None` and blank strings are omitted; order is stable.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let text = |key: &'static str, value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| (key, v.to_string()))
        };
        let number = |key: &'static str, value: Option<u32>| value.map(|v| (key, v.to_string()));

        [
            text("name", &self.name),
            number("rating", self.rating),
            number("distance", self.distance),
            number("price", self.price),
            text("cuisine", &self.cuisine),
            number("limit", self.limit),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.to_query_pairs().is_empty()
    }
}

/// A restaurant record as served by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub rating: u32,
    pub distance: u32,
    pub price: u32,
    #[serde(default)]
    pub cuisine_id: Option<i64>,
    pub cuisine: String,
}

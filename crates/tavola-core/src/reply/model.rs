//! Renderable elements produced from an assistant reply.

use serde::{Deserialize, Serialize};

/// A structured restaurant recommendation lifted out of a reply line.
///
/// The numeric-looking fields are kept as the exact text the assistant
/// wrote so they render unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantSummary {
    pub name: String,
    pub rating: String,
    pub distance: String,
    pub price: String,
    pub cuisine: String,
}

impl RestaurantSummary {
    /// Reproduces the recommendation line this summary was parsed from.
    pub fn to_line(&self) -> String {
        format!(
            "- {} (Rating: {}, Distance: {}, Price: {}, Cuisine: {})",
            self.name, self.rating, self.distance, self.price, self.cuisine
        )
    }
}

/// One renderable piece of an assistant reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum ParsedElement {
    /// A block of consecutive prose lines, trimmed.
    Text(String),
    /// A single structured recommendation.
    Restaurant(RestaurantSummary),
}

impl ParsedElement {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(content) => Some(content),
            Self::Restaurant(_) => None,
        }
    }

    pub fn as_restaurant(&self) -> Option<&RestaurantSummary> {
        match self {
            Self::Restaurant(summary) => Some(summary),
            Self::Text(_) => None,
        }
    }
}

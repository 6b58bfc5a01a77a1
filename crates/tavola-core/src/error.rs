//! Error types for the Tavola client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::reservation::WorkflowError;

/// User-facing message shown when a chat request fails for any reason.
pub const CHAT_FAILURE_MESSAGE: &str = "Sorry, I encountered an error. Please try again.";

/// User-facing message shown when a restaurant search fails without detail.
pub const SEARCH_FAILURE_MESSAGE: &str = "Failed to fetch restaurants. Please try again.";

/// A shared error type for the entire Tavola client.
///
/// Every variant is locally recoverable: nothing in the client treats an
/// error as fatal to the process.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TavolaError {
    /// The request never produced an HTTP response (connection refused, timeout, ...)
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// The server answered with a non-2xx status
    #[error("Server error: {status}")]
    Http {
        status: u16,
        #[serde(default)]
        body: Option<String>,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON", "query", ...
        message: String,
    },

    /// Input rejected before any network call
    #[error(transparent)]
    Validation(#[from] WorkflowError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TavolaError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates an Http error from a status code and an optional response body.
    ///
    /// Blank bodies are dropped so that `body` is only `Some` when the server
    /// actually said something.
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        Self::Http {
            status,
            body: if body.trim().is_empty() {
                None
            } else {
                Some(body)
            },
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Check if this is a non-2xx response
    pub fn is_http(&self) -> bool {
        matches!(self, Self::Http { .. })
    }

    /// Check if the input was rejected locally
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Returns the HTTP status for `Http` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<serde_json::Error> for TavolaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from String (for error messages)
impl From<String> for TavolaError {
    fn from(err: String) -> Self {
        Self::Internal(err)
    }
}

/// A type alias for `Result<T, TavolaError>`.
pub type Result<T> = std::result::Result<T, TavolaError>;

//! Conversation message types.

use serde::{Deserialize, Serialize};

use crate::reply::{ParsedElement, interpret_reply};

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Message typed by the user.
    User,
    /// Message produced by the assistant (or a local error stand-in).
    Assistant,
}

/// A single message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// The raw message text.
    pub text: String,
    /// Who wrote it.
    pub sender: Sender,
    /// Set when the message stands in for a failed request.
    #[serde(default)]
    pub is_error: bool,
    /// Timestamp when the message was appended (RFC 3339).
    pub timestamp: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text.into(), Sender::User, false)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(text.into(), Sender::Assistant, false)
    }

    /// An assistant-side message flagged as an error.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text.into(), Sender::Assistant, true)
    }

    fn new(text: String, sender: Sender, is_error: bool) -> Self {
        Self {
            text,
            sender,
            is_error,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Renderable elements for this message.
    ///
    /// Assistant replies go through the reply interpreter; user input and
    /// error stand-ins are shown verbatim as a single text element.
    pub fn elements(&self) -> Vec<ParsedElement> {
        match self.sender {
            Sender::Assistant if !self.is_error => interpret_reply(&self.text),
            _ => vec![ParsedElement::text(self.text.clone())],
        }
    }
}

//! Chat wire payloads for `POST /agents/chat`.

use serde::{Deserialize, Serialize};

/// Opaque conversation state returned by the chat backend.
///
/// The client never looks inside: it stores the value verbatim and sends it
/// back with the next message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationContext(serde_json::Value);

impl ConversationContext {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

/// Kind of follow-up the assistant is proposing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    Search,
    PendingReservation,
    /// Any action type this client does not know about yet.
    #[serde(other)]
    Unknown,
}

/// Follow-up action attached to a chat reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingAction {
    #[serde(rename = "type")]
    pub action_type: ActionType,
}

/// Body of an outgoing chat request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// `null` until the first reply arrives.
    pub context: Option<ConversationContext>,
}

/// Body of a chat response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub reply: String,
    #[serde(default)]
    pub pending_action: Option<PendingAction>,
    #[serde(default)]
    pub context: Option<ConversationContext>,
}

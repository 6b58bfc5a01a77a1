//! Conversation session state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::message::ChatMessage;
use super::wire::{ChatReply, ChatRequest, ConversationContext, PendingAction};
use crate::error::CHAT_FAILURE_MESSAGE;

/// The complete client-side state of one conversation.
///
/// A session is created when a conversation starts and reset on an explicit
/// clear. It owns:
/// - The append-only message log
/// - The opaque context token threaded into the next request
/// - The latest pending action announced by the assistant
/// - A busy flag that suppresses input while a reply is outstanding
///
/// A turn is split into `begin_turn` (before the request) and
/// `complete_turn` / `fail_turn` (after it), so the network call itself
/// stays outside the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSession {
    id: String,
    messages: Vec<ChatMessage>,
    context: Option<ConversationContext>,
    pending_action: Option<PendingAction>,
    awaiting_reply: bool,
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationSession {
    /// Starts an empty conversation with a fresh id.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            messages: Vec::new(),
            context: None,
            pending_action: None,
            awaiting_reply: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn context(&self) -> Option<&ConversationContext> {
        self.context.as_ref()
    }

    pub fn pending_action(&self) -> Option<&PendingAction> {
        self.pending_action.as_ref()
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    /// Records the user's message and builds the outgoing request.
    ///
    /// Returns `None` (and changes nothing) when the input is blank or a
    /// reply is still outstanding.
    pub fn begin_turn(&mut self, input: &str) -> Option<ChatRequest> {
        if input.trim().is_empty() || self.awaiting_reply {
            tracing::debug!(
                session_id = %self.id,
                awaiting_reply = self.awaiting_reply,
                "Chat input suppressed"
            );
            return None;
        }

        self.messages.push(ChatMessage::user(input));
        self.awaiting_reply = true;

        Some(ChatRequest {
            message: input.to_string(),
            context: self.context.clone(),
        })
    }

    /// Appends the assistant reply and replaces the context wholesale.
    pub fn complete_turn(&mut self, reply: ChatReply) -> &ChatMessage {
        self.context = reply.context;
        self.pending_action = reply.pending_action;
        self.awaiting_reply = false;
        self.push(ChatMessage::assistant(reply.reply))
    }

    /// Appends the generic error message; the context is left as it was.
    pub fn fail_turn(&mut self) -> &ChatMessage {
        self.awaiting_reply = false;
        self.push(ChatMessage::error(CHAT_FAILURE_MESSAGE))
    }

    /// Clears messages, context and pending action. The id is kept.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.context = None;
        self.pending_action = None;
        self.awaiting_reply = false;
    }

    fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{ActionType, Sender};
    use serde_json::json;

    fn reply(text: &str, context: serde_json::Value) -> ChatReply {
        ChatReply {
            reply: text.to_string(),
            pending_action: None,
            context: Some(ConversationContext::new(context)),
        }
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = ConversationSession::new();
        assert!(session.messages().is_empty());
        assert!(session.context().is_none());
        assert!(!session.is_awaiting_reply());
        assert!(!session.id().is_empty());
    }

    #[test]
    fn test_first_request_carries_null_context() {
        let mut session = ConversationSession::new();
        let request = session.begin_turn("find pizza").unwrap();

        assert_eq!(request.message, "find pizza");
        assert!(request.context.is_none());
        assert!(session.is_awaiting_reply());
        assert_eq!(session.messages()[0].sender, Sender::User);
    }

    #[test]
    fn test_blank_input_is_suppressed() {
        let mut session = ConversationSession::new();
        assert!(session.begin_turn("   ").is_none());
        assert!(session.messages().is_empty());
    }

    #[test]
    fn test_input_suppressed_while_awaiting_reply() {
        let mut session = ConversationSession::new();
        session.begin_turn("first").unwrap();

        assert!(session.begin_turn("second").is_none());
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_context_is_threaded_into_next_request() {
        let mut session = ConversationSession::new();
        session.begin_turn("first").unwrap();
        session.complete_turn(reply("ok", json!({ "lastIntent": "SEARCH" })));

        let request = session.begin_turn("second").unwrap();
        assert_eq!(
            request.context.unwrap().as_value(),
            &json!({ "lastIntent": "SEARCH" })
        );
    }

    #[test]
    fn test_complete_turn_replaces_context_and_action() {
        let mut session = ConversationSession::new();
        session.begin_turn("first").unwrap();
        session.complete_turn(ChatReply {
            reply: "searching".into(),
            pending_action: Some(PendingAction {
                action_type: ActionType::Search,
            }),
            context: Some(ConversationContext::new(json!({ "n": 1 }))),
        });
        session.begin_turn("second").unwrap();
        let message = session.complete_turn(reply("done", json!({ "n": 2 })));

        assert_eq!(message.text, "done");
        assert!(session.pending_action().is_none());
        assert_eq!(session.context().unwrap().as_value(), &json!({ "n": 2 }));
        assert_eq!(session.messages().len(), 4);
    }

    #[test]
    fn test_failed_turn_appends_error_and_keeps_context() {
        let mut session = ConversationSession::new();
        session.begin_turn("first").unwrap();
        session.complete_turn(reply("ok", json!("token-1")));

        session.begin_turn("second").unwrap();
        let message = session.fail_turn().clone();

        assert!(message.is_error);
        assert_eq!(message.text, CHAT_FAILURE_MESSAGE);
        assert!(!session.is_awaiting_reply());
        assert_eq!(session.context().unwrap().as_value(), &json!("token-1"));
    }

    #[test]
    fn test_reset_clears_everything_but_id() {
        let mut session = ConversationSession::new();
        let id = session.id().to_string();
        session.begin_turn("first").unwrap();
        session.complete_turn(reply("ok", json!({})));

        session.reset();

        assert_eq!(session.id(), id);
        assert!(session.messages().is_empty());
        assert!(session.context().is_none());
    }
}

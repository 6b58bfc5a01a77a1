//! Conversation turn use case.

use std::sync::Arc;

use tavola_core::chat::{ChatGateway, ConversationSession};

/// Runs conversation turns against a chat backend.
///
/// The session is passed in and handed back, so the caller always owns the
/// conversation state between turns.
pub struct ChatUseCase {
    gateway: Arc<dyn ChatGateway>,
}

impl ChatUseCase {
    pub fn new(gateway: Arc<dyn ChatGateway>) -> Self {
        Self { gateway }
    }

    /// Sends `input` as the next user message.
    ///
    /// Blank input, or input arriving while a reply is outstanding, is
    /// ignored and the session comes back unchanged. A failed request never
    /// aborts the conversation: it appends an error-flagged assistant
    /// message instead.
    pub async fn send_message(
        &self,
        mut session: ConversationSession,
        input: &str,
    ) -> ConversationSession {
        let Some(request) = session.begin_turn(input) else {
            return session;
        };

        match self.gateway.send_chat(request).await {
            Ok(reply) => {
                tracing::debug!(session_id = %session.id(), "Chat reply received");
                session.complete_turn(reply);
            }
            Err(err) => {
                tracing::warn!(session_id = %session.id(), error = %err, "Chat request failed");
                session.fail_turn();
            }
        }
        session
    }
}

//! Conversation domain module.
//!
//! # Module Structure
//!
//! - `message`: Conversation message types (`Sender`, `ChatMessage`)
//! - `wire`: Chat request/response payloads and the opaque context token
//! - `session`: Explicit conversation state (`ConversationSession`)
//! - `gateway`: Trait for the chat backend

mod gateway;
mod message;
mod session;
mod wire;

pub use gateway::ChatGateway;
pub use message::{ChatMessage, Sender};
pub use session::ConversationSession;
pub use wire::{ActionType, ChatReply, ChatRequest, ConversationContext, PendingAction};

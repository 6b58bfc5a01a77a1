//! Chat backend trait.

use async_trait::async_trait;

use super::wire::{ChatReply, ChatRequest};
use crate::error::Result;

/// Sends one user message to the assistant backend.
///
/// Implementations perform exactly one request per call and never retry.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    async fn send_chat(&self, request: ChatRequest) -> Result<ChatReply>;
}

//! Bot abstraction for sending replies.
//!
//! [`Bot`] is transport-agnostic; the teloxide implementation lives in telegram-relay.

use crate::error::Result;
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Abstraction for sending outbound text. Implementations map to a transport
/// (e.g. Telegram); tests can substitute an in-memory impl.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
}

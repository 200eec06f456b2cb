//! Plain chat: appends the user turn, composes the outbound turns (debate framing
//! when the flag is on), calls the completion API, appends the assistant turn, and
//! replies with the text plus the measured latency.

use std::sync::Arc;

use async_trait::async_trait;
use composer::{classify, compose_chat, Inbound};
use gateway::{ChatCompleter, ChatReply, GatewayError, AI_ERROR_REPLY};
use relay_core::{Handler, HandlerResponse, Message, Result, Role};
use session_store::SessionStore;
use tracing::{error, info, instrument};

pub struct ChatHandler {
    store: Arc<dyn SessionStore>,
    completer: Arc<dyn ChatCompleter>,
}

impl ChatHandler {
    pub fn new(store: Arc<dyn SessionStore>, completer: Arc<dyn ChatCompleter>) -> Self {
        Self { store, completer }
    }

    /// Reply body: completion text plus the latency suffix, two-decimal seconds.
    fn format_reply(reply: &ChatReply) -> String {
        format!(
            "{}\n\n⏱️ Response time: {:.2}s",
            reply.text,
            reply.latency.as_secs_f64()
        )
    }
}

#[async_trait]
impl Handler for ChatHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Inbound::ChatMessage(text) = classify(&message.content) else {
            return Ok(HandlerResponse::Continue);
        };
        // Unrecognized commands fall through the whole chain and get no reply.
        if text.is_empty() || text.starts_with('/') {
            return Ok(HandlerResponse::Continue);
        }

        let user_id = message.user.id;
        self.store.append_turn(user_id, Role::User, &text).await?;

        let history = self.store.history(user_id).await?;
        let debate_mode = self.store.debate_mode(user_id).await?;
        let turns = compose_chat(&history, debate_mode);

        info!(
            user_id,
            debate_mode,
            turn_count = turns.len(),
            "requesting completion"
        );

        let reply = match self.completer.complete_chat(&turns).await {
            Ok(reply) => reply,
            Err(GatewayError::Http(e)) => {
                error!(error = %e, user_id, "completion call failed");
                ChatReply {
                    text: AI_ERROR_REPLY.to_string(),
                    latency: std::time::Duration::ZERO,
                }
            }
        };

        // The assistant turn (error string included) is stored so the session
        // transcript matches what the user saw.
        self.store
            .append_turn(user_id, Role::Assistant, &reply.text)
            .await?;

        Ok(HandlerResponse::Reply(Self::format_reply(&reply)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// **Test: Latency renders with two-decimal precision in seconds.**
    #[test]
    fn format_reply_renders_two_decimal_latency() {
        let reply = ChatReply {
            text: "hello".to_string(),
            latency: Duration::from_millis(1234),
        };
        assert_eq!(
            ChatHandler::format_reply(&reply),
            "hello\n\n⏱️ Response time: 1.23s"
        );
    }
}

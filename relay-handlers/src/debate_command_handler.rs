//! Debate toggle: flips the per-user flag and replies with the new state.
//! Does not touch history and never calls the gateway.

use std::sync::Arc;

use async_trait::async_trait;
use composer::{classify, Command, Inbound};
use relay_core::{Handler, HandlerResponse, Message, Result};
use session_store::SessionStore;
use tracing::{info, instrument};

pub struct DebateCommandHandler {
    store: Arc<dyn SessionStore>,
}

impl DebateCommandHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Handler for DebateCommandHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Inbound::Command(Command::DebateToggle) = classify(&message.content) else {
            return Ok(HandlerResponse::Continue);
        };

        let enabled = self.store.toggle_debate(message.user.id).await?;
        info!(user_id = message.user.id, enabled, "debate mode toggled");

        let status = if enabled { "enabled" } else { "disabled" };
        Ok(HandlerResponse::Reply(format!(
            "🗣️ Debate mode is now {}.",
            status
        )))
    }
}

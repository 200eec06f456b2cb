//! REPL runner: converts each teloxide message to a core Message and hands it to the
//! HandlerChain on a spawned task, then sends the chain's reply. One slow gateway
//! round-trip only suspends its own task; unrelated users' messages keep flowing.

use std::sync::Arc;

use anyhow::Result;
use relay_core::{Bot as CoreBot, HandlerResponse, ToCoreMessage};
use relay_handlers::HandlerChain;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use crate::adapters::TelegramMessageWrapper;
use crate::bot_adapter::TelegramBotAdapter;

/// Starts the REPL with the given teloxide Bot and HandlerChain. Each text message
/// is converted and processed on its own tokio task; non-text messages are ignored.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    let responder: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(bot.clone()));

    info!("Bot is running...");
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = handler_chain.clone();
        let responder = responder.clone();

        async move {
            if msg.text().is_none() {
                info!(chat_id = msg.chat.id.0, "Received non-text message, ignoring");
                return respond(());
            }

            let core_msg = TelegramMessageWrapper(&msg).to_core();
            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_id = %core_msg.id,
                "Received message"
            );

            tokio::spawn(async move {
                match chain.handle(&core_msg).await {
                    Ok(HandlerResponse::Reply(text)) => {
                        if let Err(e) = responder.reply_to(&core_msg, &text).await {
                            error!(
                                error = %e,
                                user_id = core_msg.user.id,
                                chat_id = core_msg.chat.id,
                                "Failed to send reply"
                            );
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        error!(
                            error = %e,
                            user_id = core_msg.user.id,
                            "Handler chain failed"
                        );
                    }
                }
            });

            respond(())
        }
    })
    .await;

    Ok(())
}

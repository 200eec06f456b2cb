//! Facade: config loading, tracing init, assembly, REPL. Missing secrets abort here,
//! before any network connection is made.

use anyhow::Result;
use gateway::{OpenRouterConfig, SerperConfig};
use telegram_relay::{run_repl, TelegramConfig};
use tracing::info;

use crate::assembly::build_handler_chain;

/// Runs the bot until the process is stopped. `token_override` takes precedence over
/// the BOT_TOKEN env var (CLI `--token`).
pub async fn run_bot(token_override: Option<String>) -> Result<()> {
    let telegram = match token_override {
        Some(token) => TelegramConfig::with_token(token),
        None => TelegramConfig::from_env()?,
    };
    relay_core::init_tracing(telegram.log_file.as_deref())?;

    let openrouter = OpenRouterConfig::from_env()?;
    let serper = SerperConfig::from_env()?;
    info!(model = %openrouter.model, "configuration loaded");

    let chain = build_handler_chain(&openrouter, &serper);
    let bot = telegram.build_bot()?;
    run_repl(bot, chain).await
}

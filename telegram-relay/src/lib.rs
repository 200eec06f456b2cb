//! # telegram-relay
//!
//! Telegram transport layer: adapters from teloxide types to core types, the
//! [`relay_core::Bot`] implementation, minimal env config, and the REPL runner.
//! Handles only Telegram connectivity and handler-chain execution; no session,
//! composition or gateway logic.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::run_repl;

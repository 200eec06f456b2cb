//! # chatrelay-bot
//!
//! Full integration: loads config, assembles the session store, gateway clients and
//! handler chain, and runs the Telegram REPL. The binary in `main.rs` stays thin.

mod assembly;
mod facade;

pub use assembly::{build_handler_chain, chain_from_parts};
pub use facade::run_bot;

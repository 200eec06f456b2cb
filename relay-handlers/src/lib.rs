//! # relay-handlers
//!
//! The message router: a [`HandlerChain`] of three handlers run in order per inbound
//! message — [`DebateCommandHandler`] (toggle command), [`SearchHandler`] (search
//! directives), [`ChatHandler`] (everything else). The first handler that replies
//! ends the chain. Gateway failures are delivered as in-band reply strings, never as
//! errors visible to the transport.

mod chain;
mod chat_handler;
mod debate_command_handler;
mod search_handler;

pub use chain::HandlerChain;
pub use chat_handler::ChatHandler;
pub use debate_command_handler::DebateCommandHandler;
pub use search_handler::SearchHandler;

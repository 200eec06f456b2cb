//! # relay-core
//!
//! Core types and traits for the chat relay: [`Bot`], [`Handler`], message, turn and
//! role types, error enums, and tracing initialization. Transport-agnostic; used by
//! telegram-relay, relay-handlers, session-store and gateway.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{HandlerError, RelayError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Message, Role, ToCoreMessage, ToCoreUser, Turn, User,
};

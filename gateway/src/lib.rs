//! # gateway
//!
//! The boundary component issuing outbound calls to the LLM completion API and the
//! web-search API, normalizing results into plain text.
//!
//! [`ChatCompleter`] and [`SearchProvider`] are the seams the router depends on;
//! [`OpenRouterClient`] and [`SerperClient`] are the reqwest-backed implementations.
//! Non-success statuses and malformed bodies are normalized to fixed in-band reply
//! strings with latency still measured; only transport-level failures surface as
//! [`GatewayError`]. No retries, no backoff, no caching.

use std::time::Duration;

use async_trait::async_trait;
use relay_core::Turn;
use thiserror::Error;

mod config;
mod openrouter;
mod serper;

pub use config::{OpenRouterConfig, SerperConfig};
pub use openrouter::OpenRouterClient;
pub use serper::SerperClient;

/// Fixed reply when the completion API fails or returns an unusable body.
pub const AI_ERROR_REPLY: &str = "⚠️ AI error: Could not get response.";

/// Fixed reply when the search API fails or returns no organic results.
pub const SEARCH_ERROR_REPLY: &str = "⚠️ Search failed or returned no results.";

/// Normalized completion result: reply text plus wall-clock latency measured around
/// the HTTP round-trip. Latency is reported best-effort on API failure too.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub text: String,
    pub latency: Duration,
}

/// Transport-level gateway failure (connect, timeout, TLS). API-level failures are
/// normalized into reply text instead and never reach this type.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("HTTP request failed: {0}")]
    Http(String),
}

/// LLM completion seam: send ordered turns, get the normalized reply and latency.
#[async_trait]
pub trait ChatCompleter: Send + Sync {
    async fn complete_chat(&self, turns: &[Turn]) -> Result<ChatReply, GatewayError>;
}

/// Web-search seam: send a query, get formatted result text.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str) -> Result<String, GatewayError>;
}

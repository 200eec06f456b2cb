//! Gateway configuration: env-backed structs for the completion and search APIs.
//! Required keys fail fast at startup; endpoints and model have sensible defaults.

use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "deepseek-chat";
pub const DEFAULT_SERPER_ENDPOINT: &str = "https://google.serper.dev/search";

/// Completion-API config (OpenAI-compatible wire format).
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl OpenRouterConfig {
    /// Loads from env: OPENROUTER_API_KEY required; OPENROUTER_BASE_URL and MODEL
    /// optional with defaults.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("OPENROUTER_API_KEY").context("OPENROUTER_API_KEY not set")?;
        let base_url = env::var("OPENROUTER_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_OPENROUTER_BASE_URL.to_string());
        let model = env::var("MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Ok(Self {
            api_key,
            base_url,
            model,
        })
    }

    /// Constructs with the given key and default base URL and model.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_OPENROUTER_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

/// Search-API config (Serper-style: API key header, `{"q": query}` body).
#[derive(Debug, Clone)]
pub struct SerperConfig {
    pub api_key: String,
    pub endpoint: String,
}

impl SerperConfig {
    /// Loads from env: SERPER_API_KEY required; SERPER_ENDPOINT optional with default.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("SERPER_API_KEY").context("SERPER_API_KEY not set")?;
        let endpoint =
            env::var("SERPER_ENDPOINT").unwrap_or_else(|_| DEFAULT_SERPER_ENDPOINT.to_string());
        Ok(Self { api_key, endpoint })
    }

    /// Constructs with the given key and the default endpoint.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_SERPER_ENDPOINT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_api_key_uses_defaults() {
        let config = OpenRouterConfig::with_api_key("k");
        assert_eq!(config.api_key, "k");
        assert_eq!(config.base_url, DEFAULT_OPENROUTER_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);

        let search = SerperConfig::with_api_key("s");
        assert_eq!(search.api_key, "s");
        assert_eq!(search.endpoint, DEFAULT_SERPER_ENDPOINT);
    }
}

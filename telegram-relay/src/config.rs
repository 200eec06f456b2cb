//! Minimal transport config: token, optional API URL, optional log file path.
//! Loaded from the environment: BOT_TOKEN, TELEGRAM_API_URL, LOG_FILE.

use anyhow::Result;
use std::env;

/// Telegram connectivity and logging config.
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub log_file: Option<String>,
}

impl TelegramConfig {
    /// Loads from env: BOT_TOKEN required, TELEGRAM_API_URL and LOG_FILE optional.
    pub fn from_env() -> Result<Self> {
        let bot_token = env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?;
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").ok();
        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
        })
    }

    /// Constructs with the given token, everything else unset.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            log_file: None,
        }
    }

    /// Builds the teloxide Bot, applying the custom API URL when configured.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let mut bot = teloxide::Bot::new(self.bot_token.clone());
        if let Some(url) = &self.telegram_api_url {
            let url = url
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid TELEGRAM_API_URL: {}", e))?;
            bot = bot.set_api_url(url);
        }
        Ok(bot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_token() {
        let config = TelegramConfig::with_token("test_token".to_string());
        assert_eq!(config.bot_token, "test_token");
        assert!(config.telegram_api_url.is_none());
        assert!(config.log_file.is_none());
    }
}

//! OpenRouter-backed [`ChatCompleter`]: OpenAI-compatible chat completions over reqwest.

use std::time::Instant;

use async_trait::async_trait;
use relay_core::Turn;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::{ChatCompleter, ChatReply, GatewayError, OpenRouterConfig, AI_ERROR_REPLY};

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Turn],
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Chat-completion client for OpenRouter (or any OpenAI-compatible endpoint).
#[derive(Clone)]
pub struct OpenRouterClient {
    http: reqwest::Client,
    config: OpenRouterConfig,
}

impl OpenRouterClient {
    pub fn new(config: OpenRouterConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl ChatCompleter for OpenRouterClient {
    /// One POST, no retries. Non-success status and malformed bodies normalize to
    /// [`AI_ERROR_REPLY`] with the measured latency; only transport failures are Err.
    #[instrument(skip(self, turns), fields(model = %self.config.model))]
    async fn complete_chat(&self, turns: &[Turn]) -> Result<ChatReply, GatewayError> {
        let body = ChatCompletionRequest {
            model: &self.config.model,
            messages: turns,
        };

        let start = Instant::now();
        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Http(e.to_string()))?;
        let latency = start.elapsed();

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "completion API returned non-success status");
            return Ok(ChatReply {
                text: AI_ERROR_REPLY.to_string(),
                latency,
            });
        }

        match response.json::<ChatCompletionResponse>().await {
            Ok(parsed) => match parsed.choices.into_iter().next() {
                Some(choice) => {
                    debug!(
                        latency_ms = latency.as_millis() as u64,
                        reply_len = choice.message.content.len(),
                        "completion received"
                    );
                    Ok(ChatReply {
                        text: choice.message.content,
                        latency,
                    })
                }
                None => {
                    warn!("completion API returned no choices");
                    Ok(ChatReply {
                        text: AI_ERROR_REPLY.to_string(),
                        latency,
                    })
                }
            },
            Err(e) => {
                warn!(error = %e, "completion API returned malformed body");
                Ok(ChatReply {
                    text: AI_ERROR_REPLY.to_string(),
                    latency,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_core::Role;

    /// **Test: Request body serializes to the wire format `{model, messages: [{role, content}]}`.**
    #[test]
    fn request_body_matches_wire_format() {
        let turns = vec![Turn::system("persona"), Turn::user("hello")];
        let body = ChatCompletionRequest {
            model: "deepseek-chat",
            messages: &turns,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "deepseek-chat");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "hello");
    }

    /// **Test: A valid completion body parses down to choices[0].message.content.**
    #[test]
    fn response_body_parses_first_choice() {
        let raw = r#"{"id":"gen-1","choices":[{"index":0,"message":{"role":"assistant","content":"hi there"},"finish_reason":"stop"}]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content, "hi there");
    }

    /// **Test: Turn round-trips through the wire role names.**
    #[test]
    fn turn_roles_use_wire_names() {
        for (role, name) in [
            (Role::System, "system"),
            (Role::User, "user"),
            (Role::Assistant, "assistant"),
        ] {
            let json = serde_json::to_value(Turn {
                role,
                content: String::new(),
            })
            .unwrap();
            assert_eq!(json["role"], name);
        }
    }

    #[test]
    fn completions_url_joins_without_double_slash() {
        let mut config = OpenRouterConfig::with_api_key("k");
        config.base_url = "https://openrouter.ai/api/v1/".to_string();
        let client = OpenRouterClient::new(config);
        assert_eq!(
            client.completions_url(),
            "https://openrouter.ai/api/v1/chat/completions"
        );
    }
}

//! Serper-backed [`SearchProvider`]: web search over reqwest, formatted as plain text.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::{GatewayError, SearchProvider, SerperConfig, SEARCH_ERROR_REPLY};

/// How many organic results go into a reply.
const MAX_RESULTS: usize = 3;

#[derive(Serialize)]
struct SearchRequest<'a> {
    q: &'a str,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    organic: Vec<OrganicResult>,
}

#[derive(Deserialize)]
struct OrganicResult {
    title: String,
    link: String,
}

/// Formats the top results as "{title}\n{link}" blocks joined by blank lines.
fn format_results(results: &[OrganicResult]) -> String {
    results
        .iter()
        .take(MAX_RESULTS)
        .map(|r| format!("{}\n{}", r.title, r.link))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Web-search client for the Serper API.
#[derive(Clone)]
pub struct SerperClient {
    http: reqwest::Client,
    config: SerperConfig,
}

impl SerperClient {
    pub fn new(config: SerperConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl SearchProvider for SerperClient {
    /// One POST, no retries. Non-success status, malformed bodies and empty organic
    /// lists normalize to [`SEARCH_ERROR_REPLY`]; only transport failures are Err.
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<String, GatewayError> {
        let response = self
            .http
            .post(&self.config.endpoint)
            .header("X-API-KEY", &self.config.api_key)
            .json(&SearchRequest { q: query })
            .send()
            .await
            .map_err(|e| GatewayError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "search API returned non-success status");
            return Ok(SEARCH_ERROR_REPLY.to_string());
        }

        match response.json::<SearchResponse>().await {
            Ok(parsed) if !parsed.organic.is_empty() => {
                debug!(results = parsed.organic.len(), "search results received");
                Ok(format_results(&parsed.organic))
            }
            Ok(_) => {
                warn!("search API returned no organic results");
                Ok(SEARCH_ERROR_REPLY.to_string())
            }
            Err(e) => {
                warn!(error = %e, "search API returned malformed body");
                Ok(SEARCH_ERROR_REPLY.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(title: &str, link: &str) -> OrganicResult {
        OrganicResult {
            title: title.to_string(),
            link: link.to_string(),
        }
    }

    /// **Test: Results format as "{title}\n{link}" joined by blank lines, capped at three.**
    #[test]
    fn format_results_takes_top_three() {
        let results = vec![
            result("One", "https://one.example"),
            result("Two", "https://two.example"),
            result("Three", "https://three.example"),
            result("Four", "https://four.example"),
        ];

        let formatted = format_results(&results);
        assert_eq!(
            formatted,
            "One\nhttps://one.example\n\nTwo\nhttps://two.example\n\nThree\nhttps://three.example"
        );
    }

    /// **Test: Fewer than three results format without trailing separators.**
    #[test]
    fn format_results_with_single_result() {
        let formatted = format_results(&[result("Only", "https://only.example")]);
        assert_eq!(formatted, "Only\nhttps://only.example");
    }

    /// **Test: The search request body is `{"q": query}`.**
    #[test]
    fn request_body_matches_wire_format() {
        let json = serde_json::to_value(SearchRequest { q: "weather today" }).unwrap();
        assert_eq!(json, serde_json::json!({ "q": "weather today" }));
    }

    /// **Test: A response body with extra fields parses; missing organic defaults to empty.**
    #[test]
    fn response_body_parses_organic_results() {
        let raw = r#"{"searchParameters":{"q":"x"},"organic":[{"title":"T","link":"https://t","snippet":"s","position":1}]}"#;
        let parsed: SearchResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.organic.len(), 1);
        assert_eq!(parsed.organic[0].title, "T");

        let empty: SearchResponse = serde_json::from_str(r#"{"searchParameters":{}}"#).unwrap();
        assert!(empty.organic.is_empty());
    }
}

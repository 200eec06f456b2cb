//! Search directives: extracts the query, calls the search provider, replies with
//! the raw formatted results. Search replies are not recorded in session history —
//! a lookup is not a conversation turn, and the next completion never cites it.

use std::sync::Arc;

use async_trait::async_trait;
use composer::{classify, Inbound};
use gateway::{SearchProvider, SEARCH_ERROR_REPLY};
use relay_core::{Handler, HandlerResponse, Message, Result};
use tracing::{error, info, instrument};

pub struct SearchHandler {
    provider: Arc<dyn SearchProvider>,
}

impl SearchHandler {
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Handler for SearchHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Inbound::SearchRequest(query) = classify(&message.content) else {
            return Ok(HandlerResponse::Continue);
        };

        if query.is_empty() {
            return Ok(HandlerResponse::Reply(SEARCH_ERROR_REPLY.to_string()));
        }

        info!(user_id = message.user.id, query = %query, "search request");
        let reply = match self.provider.search(&query).await {
            Ok(text) => text,
            Err(e) => {
                error!(error = %e, user_id = message.user.id, "search call failed");
                SEARCH_ERROR_REPLY.to_string()
            }
        };

        Ok(HandlerResponse::Reply(reply))
    }
}

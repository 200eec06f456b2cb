//! Assembly: wires the session store, gateway clients and handlers into a chain.
//! Used by the [facade](crate::facade).

use std::sync::Arc;

use gateway::{
    ChatCompleter, OpenRouterClient, OpenRouterConfig, SearchProvider, SerperClient, SerperConfig,
};
use relay_handlers::{ChatHandler, DebateCommandHandler, HandlerChain, SearchHandler};
use session_store::{InMemorySessionStore, SessionStore};

/// Builds the production chain from gateway configs: in-memory sessions, OpenRouter
/// completions, Serper search.
pub fn build_handler_chain(openrouter: &OpenRouterConfig, serper: &SerperConfig) -> HandlerChain {
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let completer: Arc<dyn ChatCompleter> = Arc::new(OpenRouterClient::new(openrouter.clone()));
    let provider: Arc<dyn SearchProvider> = Arc::new(SerperClient::new(serper.clone()));
    chain_from_parts(store, completer, provider)
}

/// Chain order is the routing policy: command toggle first, then search directives,
/// then plain chat.
pub fn chain_from_parts(
    store: Arc<dyn SessionStore>,
    completer: Arc<dyn ChatCompleter>,
    provider: Arc<dyn SearchProvider>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(DebateCommandHandler::new(store.clone())))
        .add_handler(Arc::new(SearchHandler::new(provider)))
        .add_handler(Arc::new(ChatHandler::new(store, completer)))
}

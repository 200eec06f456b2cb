//! In-memory session backend: a HashMap behind `Arc<RwLock<..>>`.
//!
//! Fast, no I/O, lost on restart. Thread-safe for concurrent handlers; each method
//! takes the lock once so per-id updates are atomic.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use relay_core::{Role, Turn};
use tokio::sync::RwLock;
use tracing::debug;

use crate::{Session, SessionStore, StoreError, MAX_HISTORY_TURNS};

/// Process-lifetime in-memory [`SessionStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<i64, Session>>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of sessions in the store.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Returns true if no session has been created yet.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Drops all sessions.
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn session(&self, id: i64) -> Result<Session, StoreError> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.entry(id).or_default().clone())
    }

    async fn append_turn(&self, id: i64, role: Role, content: &str) -> Result<(), StoreError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.entry(id).or_default();
        session.history.push(Turn {
            role,
            content: content.to_string(),
        });
        if session.history.len() > MAX_HISTORY_TURNS {
            let excess = session.history.len() - MAX_HISTORY_TURNS;
            session.history.drain(..excess);
        }
        debug!(
            session_id = id,
            history_len = session.history.len(),
            "turn appended"
        );
        Ok(())
    }

    async fn toggle_debate(&self, id: i64) -> Result<bool, StoreError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.entry(id).or_default();
        session.debate_mode = !session.debate_mode;
        Ok(session.debate_mode)
    }

    async fn debate_mode(&self, id: i64) -> Result<bool, StoreError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(&id).map(|s| s.debate_mode).unwrap_or(false))
    }

    async fn history(&self, id: i64) -> Result<Vec<Turn>, StoreError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(&id).map(|s| s.history.clone()).unwrap_or_default())
    }
}

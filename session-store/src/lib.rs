//! # session-store
//!
//! Per-user conversation state: a bounded trailing window of [`Turn`]s plus the
//! debate-mode flag. [`SessionStore`] is the repository interface the router is
//! injected with; [`InMemorySessionStore`] is the process-lifetime backend. Nothing
//! is persisted across restarts.

use async_trait::async_trait;
use relay_core::{RelayError, Role, Turn};
use thiserror::Error;

mod inmemory;

pub use inmemory::InMemorySessionStore;

/// Maximum turns kept per session; older turns are dropped after every append.
pub const MAX_HISTORY_TURNS: usize = 10;

/// One user's conversation state. Created lazily on first access; lives for the
/// process lifetime.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Ordered trailing window of turns, never longer than [`MAX_HISTORY_TURNS`].
    pub history: Vec<Turn>,
    /// Debate-mode flag; strict boolean toggle, independent of history.
    pub debate_mode: bool,
}

/// Session backend failure. The in-memory backend never fails; the variant exists so
/// a persistent backend can be swapped in behind the same trait.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("session backend error: {0}")]
    Backend(String),
}

impl From<StoreError> for RelayError {
    fn from(e: StoreError) -> Self {
        RelayError::Session(e.to_string())
    }
}

/// Repository interface for per-user sessions. Updates are atomic per id; handlers
/// for distinct users never observe each other's partial writes.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns a snapshot of the session for `id`, creating the default session
    /// (empty history, debate off) if absent.
    async fn session(&self, id: i64) -> Result<Session, StoreError>;

    /// Appends a turn to the session's history, then truncates to the last
    /// [`MAX_HISTORY_TURNS`] turns, preserving order.
    async fn append_turn(&self, id: i64, role: Role, content: &str) -> Result<(), StoreError>;

    /// Flips the debate-mode flag and returns the new value.
    async fn toggle_debate(&self, id: i64) -> Result<bool, StoreError>;

    /// Reads the debate-mode flag; an absent id reads as false.
    async fn debate_mode(&self, id: i64) -> Result<bool, StoreError>;

    /// Returns a snapshot of the bounded history for `id`.
    async fn history(&self, id: i64) -> Result<Vec<Turn>, StoreError>;
}

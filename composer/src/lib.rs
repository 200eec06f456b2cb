//! # composer
//!
//! Classifies inbound text into a tagged request and composes the outbound prompt.
//!
//! ## Classification
//!
//! [`classify`] is the single decision point, evaluated in order:
//!
//! 1. Command token (`/debate`, optional `@botname` suffix) → [`Inbound::Command`]
//! 2. `search ` prefix or `search:` substring (ASCII-case-insensitive) →
//!    [`Inbound::SearchRequest`] with the trimmed remainder as the query
//! 3. Anything else → [`Inbound::ChatMessage`]
//!
//! ## Composition
//!
//! [`compose_chat`] turns session history into the ordered outbound turns. With
//! debate mode on, a persona system turn is prepended and the final user turn is
//! rewritten through the framing template. Framing applies to the outbound copy
//! only; stored history is never rewritten.
//!
//! Pure and synchronous; no I/O.

use relay_core::{Role, Turn};

/// System persona prepended to the outbound turns when debate mode is on.
pub const DEBATE_PERSONA: &str =
    "You are a debate agent. Argue clearly, persuasively, and take a strong stance.";

/// Recognized bot commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Flip the per-user debate-mode flag.
    DebateToggle,
}

/// Tagged classification of one inbound text message. Carries the request kind and,
/// for search, the extracted query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    Command(Command),
    SearchRequest(String),
    ChatMessage(String),
}

/// Classifies raw message text. See the module docs for the decision order.
pub fn classify(text: &str) -> Inbound {
    let trimmed = text.trim();

    if let Some(token) = trimmed.split_whitespace().next() {
        let bare = token.split('@').next().unwrap_or(token);
        if bare.eq_ignore_ascii_case("/debate") {
            return Inbound::Command(Command::DebateToggle);
        }
    }

    // ASCII lowercasing keeps byte offsets aligned with the original text.
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("search ") {
        let query = trimmed["search ".len()..].trim();
        return Inbound::SearchRequest(query.to_string());
    }
    if let Some(pos) = lower.find("search:") {
        let query = trimmed[pos + "search:".len()..].trim();
        return Inbound::SearchRequest(query.to_string());
    }

    Inbound::ChatMessage(trimmed.to_string())
}

/// Wraps user text in the persuasive-argument framing used in debate mode.
pub fn frame_for_debate(text: &str) -> String {
    format!(
        "Argue persuasively and logically. Take a strong stance on the following statement and defend it:\n\n{}",
        text
    )
}

/// Composes the ordered outbound turns for a chat completion from the bounded
/// session history. With debate mode on, prepends the [`DEBATE_PERSONA`] system turn
/// and frames the final user turn; the caller's history is left untouched.
pub fn compose_chat(history: &[Turn], debate_mode: bool) -> Vec<Turn> {
    if !debate_mode {
        return history.to_vec();
    }

    let mut turns = Vec::with_capacity(history.len() + 1);
    turns.push(Turn::system(DEBATE_PERSONA));
    turns.extend(history.iter().cloned());
    if let Some(last) = turns.last_mut() {
        if last.role == Role::User {
            last.content = frame_for_debate(&last.content);
        }
    }
    turns
}

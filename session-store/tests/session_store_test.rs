//! Integration tests for [`InMemorySessionStore`] via the [`SessionStore`] trait.
//! BDD style: each test documents scenario and expected outcome.

use relay_core::{Role, Turn};
use session_store::{InMemorySessionStore, SessionStore, MAX_HISTORY_TURNS};

/// **Test: First access creates the default session (empty history, debate off).**
#[tokio::test]
async fn session_created_lazily_with_defaults() {
    let store = InMemorySessionStore::new();
    assert!(store.is_empty().await);

    let session = store.session(42).await.unwrap();
    assert!(session.history.is_empty());
    assert!(!session.debate_mode);
    assert_eq!(store.len().await, 1);
}

/// **Test: append_turn keeps order and content.**
#[tokio::test]
async fn append_turn_preserves_order() {
    let store = InMemorySessionStore::new();
    store.append_turn(1, Role::User, "hello").await.unwrap();
    store.append_turn(1, Role::Assistant, "hi there").await.unwrap();

    let history = store.history(1).await.unwrap();
    assert_eq!(
        history,
        vec![Turn::user("hello"), Turn::assistant("hi there")]
    );
}

/// **Test: History never exceeds MAX_HISTORY_TURNS after any append; the kept turns
/// are the most recent ones, in order.**
#[tokio::test]
async fn history_is_bounded_to_last_ten_turns() {
    let store = InMemorySessionStore::new();
    for i in 0..25 {
        store
            .append_turn(7, Role::User, &format!("message {}", i))
            .await
            .unwrap();
        assert!(store.history(7).await.unwrap().len() <= MAX_HISTORY_TURNS);
    }

    let history = store.history(7).await.unwrap();
    assert_eq!(history.len(), MAX_HISTORY_TURNS);
    assert_eq!(history[0].content, "message 15");
    assert_eq!(history[9].content, "message 24");
}

/// **Test: toggle_debate flips each time; an even number of toggles is a net no-op.**
#[tokio::test]
async fn toggle_debate_twice_restores_original_state() {
    let store = InMemorySessionStore::new();
    assert!(!store.debate_mode(5).await.unwrap());

    assert!(store.toggle_debate(5).await.unwrap());
    assert!(store.debate_mode(5).await.unwrap());

    assert!(!store.toggle_debate(5).await.unwrap());
    assert!(!store.debate_mode(5).await.unwrap());
}

/// **Test: Toggling debate does not touch history, and appending does not touch the flag.**
#[tokio::test]
async fn debate_flag_is_independent_of_history() {
    let store = InMemorySessionStore::new();
    store.append_turn(9, Role::User, "hello").await.unwrap();
    store.toggle_debate(9).await.unwrap();

    let session = store.session(9).await.unwrap();
    assert_eq!(session.history, vec![Turn::user("hello")]);
    assert!(session.debate_mode);
}

/// **Test: Sessions are isolated per id.**
#[tokio::test]
async fn sessions_are_isolated_per_user() {
    let store = InMemorySessionStore::new();
    store.append_turn(1, Role::User, "from one").await.unwrap();
    store.toggle_debate(2).await.unwrap();

    assert_eq!(store.history(1).await.unwrap().len(), 1);
    assert!(store.history(2).await.unwrap().is_empty());
    assert!(!store.debate_mode(1).await.unwrap());
    assert!(store.debate_mode(2).await.unwrap());
}

/// **Test: debate_mode and history reads for an unknown id do not create a session.**
#[tokio::test]
async fn reads_do_not_create_sessions() {
    let store = InMemorySessionStore::new();
    assert!(!store.debate_mode(99).await.unwrap());
    assert!(store.history(99).await.unwrap().is_empty());
    assert!(store.is_empty().await);
}

use spotstats::management::SessionManager;
use spotstats::types::Token;
use spotstats::utils;

// Helper function to create a token obtained just now
fn create_test_token(access_token: &str) -> Token {
    Token {
        access_token: access_token.to_string(),
        expires_in: 3600,
        obtained_at: utils::now(),
    }
}

#[tokio::test]
async fn test_begin_login_creates_session() {
    let sessions = SessionManager::new();

    let (session_id, state) = sessions.begin_login(None).await;

    assert_eq!(session_id.len(), 64);
    assert_eq!(state.len(), 32);
    assert_eq!(sessions.session_count().await, 1);
    assert_eq!(sessions.pending_count().await, 1);

    // A fresh session has no token yet
    assert!(sessions.token(&session_id).await.is_none());
}

#[tokio::test]
async fn test_begin_login_reuses_known_session() {
    let sessions = SessionManager::new();

    let (session_id, first_state) = sessions.begin_login(None).await;
    let (again, second_state) = sessions.begin_login(Some(session_id.as_str())).await;

    assert_eq!(session_id, again);
    assert_ne!(first_state, second_state);
    assert_eq!(sessions.session_count().await, 1);
}

#[tokio::test]
async fn test_begin_login_ignores_unknown_session() {
    let sessions = SessionManager::new();

    let (session_id, _) = sessions.begin_login(Some("forged-session-id")).await;

    assert_ne!(session_id, "forged-session-id");
}

#[tokio::test]
async fn test_complete_login_consumes_state() {
    let sessions = SessionManager::new();
    let (session_id, state) = sessions.begin_login(None).await;

    assert_eq!(
        sessions.complete_login(&state, Some(session_id.as_str())).await,
        Some(session_id.clone())
    );

    // Each state is only accepted once
    assert_eq!(sessions.complete_login(&state, Some(session_id.as_str())).await, None);
    assert_eq!(
        sessions.complete_login("unknown-state", Some(session_id.as_str())).await,
        None
    );
}

#[tokio::test]
async fn test_store_token_replaces_previous() {
    let sessions = SessionManager::new();
    let (session_id, _) = sessions.begin_login(None).await;

    sessions
        .store_token(&session_id, create_test_token("first"))
        .await;
    sessions
        .store_token(&session_id, create_test_token("second"))
        .await;

    let token = sessions.token(&session_id).await.unwrap();
    assert_eq!(token.access_token, "second");
}

#[tokio::test]
async fn test_tokens_are_isolated_per_session() {
    let sessions = SessionManager::new();
    let (alice, _) = sessions.begin_login(None).await;
    let (bob, _) = sessions.begin_login(None).await;

    sessions.store_token(&alice, create_test_token("alice")).await;

    assert_eq!(sessions.token(&alice).await.unwrap().access_token, "alice");
    assert!(sessions.token(&bob).await.is_none());
    assert!(sessions.token("nobody").await.is_none());
}

#[tokio::test]
async fn test_expired_token_is_dropped() {
    let sessions = SessionManager::new();
    let (session_id, _) = sessions.begin_login(None).await;

    let mut token = create_test_token("stale");
    token.obtained_at = utils::now() - 7200;
    sessions.store_token(&session_id, token).await;

    assert!(sessions.token(&session_id).await.is_none());
}

#[tokio::test]
async fn test_signed_in_sessions_survive_pruning() {
    let sessions = SessionManager::new();
    let (session_id, state) = sessions.begin_login(None).await;
    sessions.complete_login(&state, Some(session_id.as_str())).await;
    sessions
        .store_token(&session_id, create_test_token("kept"))
        .await;

    // Starting other logins prunes only sessions without token or login
    sessions.begin_login(None).await;
    sessions.begin_login(None).await;

    assert_eq!(sessions.session_count().await, 3);
    assert_eq!(
        sessions.token(&session_id).await.unwrap().access_token,
        "kept"
    );
}

#[tokio::test]
async fn test_complete_login_requires_starting_session() {
    let sessions = SessionManager::new();
    let (owner, state) = sessions.begin_login(None).await;
    let (other, _) = sessions.begin_login(None).await;

    // A state presented by another session is rejected and burned
    assert_eq!(sessions.complete_login(&state, Some(other.as_str())).await, None);
    assert_eq!(sessions.complete_login(&state, Some(owner.as_str())).await, None);

    // Without a session cookie the login cannot be completed either
    let (_, state) = sessions.begin_login(None).await;
    assert_eq!(sessions.complete_login(&state, None).await, None);
}

#[tokio::test]
async fn test_sessions_with_expired_tokens_are_pruned() {
    let sessions = SessionManager::new();

    for _ in 0..100 {
        let (session_id, state) = sessions.begin_login(None).await;
        sessions.complete_login(&state, Some(session_id.as_str())).await;

        let mut token = create_test_token("stale");
        token.obtained_at = 0;
        token.expires_in = 1;
        sessions.store_token(&session_id, token).await;
    }

    // Only the session of the new login is left
    sessions.begin_login(None).await;
    assert_eq!(sessions.session_count().await, 1);
}

use std::{collections::HashMap, sync::Arc};

use tokio::sync::Mutex;

use crate::{types::Token, utils};

/// Seconds a login may take between `/login` and `/callback`.
pub const PENDING_LOGIN_TTL: u64 = 600;

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub token: Option<Token>,
}

#[derive(Debug, Clone)]
struct PendingLogin {
    session_id: String,
    created_at: u64,
}

#[derive(Debug, Default)]
struct Sessions {
    sessions: HashMap<String, Session>,
    pending: HashMap<String, PendingLogin>,
}

/// In-memory session storage keyed by the session cookie.
///
/// Cloning is cheap and every clone shares the same sessions. Nothing is
/// persisted; a restart signs everybody out.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    inner: Arc<Mutex<Sessions>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a login attempt and returns `(session_id, state)`.
    ///
    /// Reuses `session_id` when it names a known session, otherwise a new
    /// session is created. The returned state must come back on the callback.
    pub async fn begin_login(&self, session_id: Option<&str>) -> (String, String) {
        let now = utils::now();
        let mut lock = self.inner.lock().await;

        // sessions without a live token only live as long as their login
        let Sessions { sessions, pending } = &mut *lock;
        pending.retain(|_, p| now < p.created_at + PENDING_LOGIN_TTL);
        sessions.retain(|id, s| {
            s.token.as_ref().is_some_and(|t| !t.is_expired(now))
                || pending.values().any(|p| &p.session_id == id)
        });

        let session_id = match session_id {
            Some(id) if lock.sessions.contains_key(id) => id.to_string(),
            _ => {
                let id = utils::generate_session_id();
                lock.sessions.insert(id.clone(), Session::default());
                id
            }
        };

        let state = utils::generate_state();
        lock.pending.insert(
            state.clone(),
            PendingLogin {
                session_id: session_id.clone(),
                created_at: now,
            },
        );

        (session_id, state)
    }

    /// Consumes a pending login and returns the session it belongs to.
    ///
    /// `session_id` is the session cookie the callback arrived with; it must
    /// name the session that started the login. Each state is accepted once,
    /// even when the check fails. Unknown or expired states yield `None`.
    pub async fn complete_login(&self, state: &str, session_id: Option<&str>) -> Option<String> {
        let mut lock = self.inner.lock().await;
        let pending = lock.pending.remove(state)?;

        if utils::now() >= pending.created_at + PENDING_LOGIN_TTL {
            return None;
        }

        if session_id != Some(pending.session_id.as_str()) {
            return None;
        }

        Some(pending.session_id)
    }

    /// Stores `token` for the session, replacing any previous token.
    pub async fn store_token(&self, session_id: &str, token: Token) {
        let mut lock = self.inner.lock().await;
        lock.sessions
            .entry(session_id.to_string())
            .or_default()
            .token = Some(token);
    }

    /// Returns the session's token if it has one that has not expired.
    /// Expired tokens are dropped.
    pub async fn token(&self, session_id: &str) -> Option<Token> {
        let mut lock = self.inner.lock().await;
        let session = lock.sessions.get_mut(session_id)?;

        let now = utils::now();
        if session.token.as_ref().is_some_and(|t| t.is_expired(now)) {
            session.token = None;
        }

        session.token.clone()
    }

    pub async fn session_count(&self) -> usize {
        self.inner.lock().await.sessions.len()
    }

    pub async fn pending_count(&self) -> usize {
        self.inner.lock().await.pending.len()
    }
}

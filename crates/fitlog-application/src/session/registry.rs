//! In-memory session store keyed by user identifier.

use fitlog_core::dialogue::UserSession;
use fitlog_core::user::UserId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Explicit per-user session store.
///
/// Sessions are created lazily at the main menu on the first message
/// from an unseen user and live in memory only. Each session sits behind
/// its own async mutex: holding the guard while a message is processed
/// serializes that user's messages in arrival order, while different
/// users proceed concurrently.
///
/// Eviction is the host's choice; an evicted session is simply recreated
/// at the main menu on the user's next message.
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<UserId, Arc<Mutex<UserSession>>>>>,
}

impl SessionRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the session for a user, creating it lazily at the main
    /// menu for a never-seen user.
    pub async fn obtain(&self, user_id: &UserId) -> Arc<Mutex<UserSession>> {
        {
            let sessions = self.sessions.read().await;
            if let Some(session) = sessions.get(user_id) {
                return session.clone();
            }
        }

        let mut sessions = self.sessions.write().await;
        sessions
            .entry(user_id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(UserSession::new(user_id.clone()))))
            .clone()
    }

    /// Removes a session from the registry.
    pub async fn evict(&self, user_id: &UserId) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(user_id);
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        let sessions = self.sessions.read().await;
        sessions.len()
    }

    /// True when no sessions are live.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

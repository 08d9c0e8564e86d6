//! In-memory registry of conversation sessions.
//!
//! Each session sits behind its own async mutex. Holding that lock for a
//! whole render serializes turns on one session while leaving other
//! sessions free to progress concurrently.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Duration;
use pathways_core::clock::Clock;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::domain::session::ConversationSession;

/// A session shared between the registry and in-flight requests.
pub type SharedSession = Arc<Mutex<ConversationSession>>;

/// Concurrency-safe map from session id to session.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<Uuid, SharedSession>>,
}

impl SessionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a fresh session and returns its id.
    pub async fn create(&self, clock: &dyn Clock) -> Uuid {
        let id = Uuid::new_v4();
        let session = Arc::new(Mutex::new(ConversationSession::new(id, clock)));
        self.sessions.write().await.insert(id, session);
        id
    }

    /// Returns the session for `id`, creating it on first interaction.
    pub async fn session(&self, id: Uuid, clock: &dyn Clock) -> SharedSession {
        if let Some(session) = self.get(id).await {
            return session;
        }

        let mut sessions = self.sessions.write().await;
        Arc::clone(
            sessions
                .entry(id)
                .or_insert_with(|| Arc::new(Mutex::new(ConversationSession::new(id, clock)))),
        )
    }

    /// Returns the session for `id` if it is registered.
    pub async fn get(&self, id: Uuid) -> Option<SharedSession> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Number of registered sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Whether no session is registered.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Removes sessions idle for at least `idle_timeout`. Sessions still
    /// referenced by an in-flight request, locked or not, are kept. Returns
    /// the number of sessions removed.
    pub async fn evict_idle(&self, clock: &dyn Clock, idle_timeout: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| {
            if Arc::strong_count(session) > 1 {
                return true;
            }
            match session.try_lock() {
                Ok(session) => clock.elapsed_since(session.last_active_at()) < idle_timeout,
                Err(_) => true,
            }
        });
        before - sessions.len()
    }
}

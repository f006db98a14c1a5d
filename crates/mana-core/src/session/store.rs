//! In-memory session store keyed by chat identity.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::model::{ChatId, Session};

/// Process-lifetime store of in-progress sessions.
///
/// Entries are created on first contact and removed as soon as a dialogue
/// completes or is cancelled; nothing survives a restart. Each handler does
/// a read-then-write on its own chat's entry only, so there is no
/// cross-identity contention to coordinate.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<ChatId, Session>>>,
}

impl SessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the session for `chat`, if one exists.
    pub async fn get(&self, chat: ChatId) -> Option<Session> {
        let sessions = self.sessions.read().await;
        sessions.get(&chat).cloned()
    }

    /// Inserts or replaces the session for `chat`.
    pub async fn insert(&self, chat: ChatId, session: Session) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(chat, session);
    }

    /// Removes the session for `chat`. Removing a missing entry is a no-op.
    pub async fn remove(&self, chat: ChatId) -> Option<Session> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(&chat)
    }

    /// Whether `chat` currently has a session.
    pub async fn contains(&self, chat: ChatId) -> bool {
        let sessions = self.sessions.read().await;
        sessions.contains_key(&chat)
    }
}

//! Session manager
//!
//! Tracks all live sessions using DashMap for thread-safe access.

use super::Session;
use crate::protocol::ServerMessage;
use dashmap::DashMap;
use std::collections::HashSet;
use std::sync::Arc;
use table_core::UserId;

/// Manages all live sessions
pub struct SessionManager {
    /// Sessions by session ID
    sessions: DashMap<String, Arc<Session>>,

    /// User ID to session IDs mapping
    user_sessions: DashMap<UserId, HashSet<String>>,
}

impl SessionManager {
    /// Create a new session manager
    #[must_use]
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
            user_sessions: DashMap::new(),
        }
    }

    /// Create a new session manager wrapped in Arc
    #[must_use]
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Register a session
    pub fn add_session(&self, session: Arc<Session>) {
        let session_id = session.session_id().to_string();
        let user_id = session.user_id();

        self.user_sessions
            .entry(user_id)
            .or_default()
            .insert(session_id.clone());
        self.sessions.insert(session_id.clone(), session);

        tracing::debug!(session_id = %session_id, user_id = %user_id, "Session added");
    }

    /// Remove a session
    ///
    /// Uses `alter` + `remove_if` so the user index never keeps empty entries.
    pub fn remove_session(&self, session_id: &str) -> Option<Arc<Session>> {
        let (_, session) = self.sessions.remove(session_id)?;
        let user_id = session.user_id();

        self.user_sessions.alter(&user_id, |_, mut ids| {
            ids.remove(session_id);
            ids
        });
        self.user_sessions.remove_if(&user_id, |_, ids| ids.is_empty());

        tracing::debug!(session_id = %session_id, "Session removed");

        Some(session)
    }

    /// Get a session by ID
    pub fn get_session(&self, session_id: &str) -> Option<Arc<Session>> {
        self.sessions.get(session_id).map(|r| r.clone())
    }

    /// Get all sessions of a user
    pub fn sessions_for_user(&self, user_id: UserId) -> Vec<Arc<Session>> {
        self.user_sessions
            .get(&user_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|sid| self.sessions.get(sid).map(|s| s.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Send a message to every session of a user without waiting
    ///
    /// Returns the number of sessions the message was queued on.
    pub fn send_to_user(&self, user_id: UserId, message: &ServerMessage) -> usize {
        let mut sent = 0;

        for session in self.sessions_for_user(user_id) {
            match session.send(message.clone()) {
                Ok(()) => sent += 1,
                Err(e) => tracing::debug!(
                    session_id = %session.session_id(),
                    error = %e,
                    "Dropped message for session"
                ),
            }
        }

        sent
    }

    /// Get the total number of sessions
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Get the number of users with at least one session
    pub fn user_count(&self) -> usize {
        self.user_sessions.len()
    }

    /// Remove sessions whose transport has gone away
    pub fn cleanup_closed_sessions(&self) -> usize {
        let closed: Vec<String> = self
            .sessions
            .iter()
            .filter(|r| r.is_closed())
            .map(|r| r.key().clone())
            .collect();

        let count = closed.len();

        for session_id in closed {
            self.remove_session(&session_id);
        }

        if count > 0 {
            tracing::info!(count = count, "Cleaned up closed sessions");
        }

        count
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("sessions", &self.sessions.len())
            .field("users", &self.user_sessions.len())
            .finish()
    }
}

//! Typing notifier backed by the session manager
//!
//! Runs under the table lock, so every send is a non-blocking `try_send`.

use crate::connection::SessionManager;
use crate::protocol::ServerMessage;
use std::sync::Arc;
use table_core::{ChatTypingEvent, Table, TableState, TypingNotifier};

/// Sends typing transitions to the sessions of everyone at a table
///
/// The typer does not hear about themselves. Players are skipped at replays
/// (they are not watching unless they also spectate) and while they are not
/// present. Spectators always receive.
pub struct SessionNotifier {
    sessions: Arc<SessionManager>,
}

impl SessionNotifier {
    pub fn new(sessions: Arc<SessionManager>) -> Self {
        Self { sessions }
    }
}

impl TypingNotifier for SessionNotifier {
    fn notify_chat_typing(&self, table: &Table, state: &TableState, name: &str, typing: bool) {
        let message = ServerMessage::chat_typing(ChatTypingEvent::new(table.id(), name, typing));
        let mut sent = 0;

        if !table.is_replay() {
            for player in state.players.iter().filter(|p| p.present && p.name != name) {
                sent += self.sessions.send_to_user(player.user_id, &message);
            }
        }

        for spectator in state.spectators.iter().filter(|sp| sp.name != name) {
            sent += self.sessions.send_to_user(spectator.user_id, &message);
        }

        tracing::trace!(
            table_id = %table.id(),
            name = %name,
            typing = typing,
            sent = sent,
            "Chat typing broadcast"
        );
    }
}

impl std::fmt::Debug for SessionNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionNotifier")
            .field("sessions", &self.sessions)
            .finish()
    }
}

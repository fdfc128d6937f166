//! A single client session
//!
//! Outbound messages go through a bounded channel drained by the transport.
//! Sends never wait: a full or closed queue drops the message.

use crate::protocol::ServerMessage;
use std::sync::Arc;
use table_core::UserId;
use tokio::sync::mpsc::{self, error::TrySendError};

/// Outbound delivery failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    #[error("session outbound queue is full")]
    Full,
    #[error("session is closed")]
    Closed,
}

/// An authenticated client session
#[derive(Debug)]
pub struct Session {
    session_id: String,
    user_id: UserId,
    username: String,
    sender: mpsc::Sender<ServerMessage>,
}

impl Session {
    /// Create a new session
    pub fn new(
        session_id: impl Into<String>,
        user_id: UserId,
        username: impl Into<String>,
        sender: mpsc::Sender<ServerMessage>,
    ) -> Arc<Self> {
        Arc::new(Self {
            session_id: session_id.into(),
            user_id,
            username: username.into(),
            sender,
        })
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Queue a message without waiting
    pub fn send(&self, message: ServerMessage) -> Result<(), SendError> {
        self.sender.try_send(message).map_err(|e| match e {
            TrySendError::Full(_) => SendError::Full,
            TrySendError::Closed(_) => SendError::Closed,
        })
    }

    /// Show a warning to the user
    pub fn warning(&self, text: impl Into<String>) {
        if let Err(e) = self.send(ServerMessage::warning(text)) {
            tracing::debug!(
                session_id = %self.session_id,
                error = %e,
                "Failed to deliver warning"
            );
        }
    }

    /// Whether the transport side has gone away
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

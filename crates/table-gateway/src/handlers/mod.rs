//! Command handlers
//!
//! Handles incoming client commands.

mod chat_typing;
mod error;

pub use chat_typing::ChatTypingHandler;
pub use error::{HandlerError, HandlerResult};

use crate::connection::Session;
use crate::protocol::ClientCommand;
use crate::server::GatewayState;

/// Dispatch incoming client commands to the appropriate handler
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Decode and handle one command frame from a session
    pub async fn dispatch(state: &GatewayState, session: &Session, text: &str) -> HandlerResult<()> {
        let command = ClientCommand::parse(text).map_err(|e| {
            tracing::warn!(
                session_id = %session.session_id(),
                error = %e,
                "Received malformed command"
            );
            HandlerError::InvalidPayload(e.to_string())
        })?;

        match command {
            ClientCommand::ChatTyping(payload) => {
                ChatTypingHandler::handle(state, session, payload).await
            }
        }
    }
}

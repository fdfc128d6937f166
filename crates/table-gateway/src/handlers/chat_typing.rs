//! Chat typing handler
//!
//! Sent whenever the user types something into a table's chat box.

use super::HandlerResult;
use crate::connection::Session;
use crate::protocol::ChatTypingPayload;
use crate::server::GatewayState;
use table_core::{DomainError, TableRegistry};
use table_service::{ServiceError, TypingService};
use tokio::time::Instant;

/// Handles chat typing commands
pub struct ChatTypingHandler;

impl ChatTypingHandler {
    /// Report that the session's user is typing at a table
    ///
    /// Rejections are shown to the user as a warning and are not errors.
    pub async fn handle(
        state: &GatewayState,
        session: &Session,
        payload: ChatTypingPayload,
    ) -> HandlerResult<()> {
        let table_id = payload.table_id;

        let result = match state.tables().get_table(table_id) {
            Some(table) => TypingService::new(state.service_context()).start_typing(
                &table,
                session.user_id(),
                Instant::now(),
            ),
            None => Err(ServiceError::Domain(DomainError::TableNotFound(table_id))),
        };

        match result {
            Ok(_) => Ok(()),
            Err(e) if e.is_rejection() => {
                tracing::debug!(
                    session_id = %session.session_id(),
                    user_id = %session.user_id(),
                    table_id = %table_id,
                    code = e.error_code(),
                    "Typing report rejected"
                );
                session.warning(e.warning_text());
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}

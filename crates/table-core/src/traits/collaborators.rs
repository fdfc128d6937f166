//! Collaborator traits - the surfaces the typing engine needs from the
//! surrounding system
//!
//! The domain layer defines what it needs; the gateway provides the
//! in-memory implementations.

use std::sync::Arc;

use crate::entities::{Table, TableState};
use crate::value_objects::TableId;

// ============================================================================
// Table Registry
// ============================================================================

/// Resolves table ids to the table instance currently registered under them
pub trait TableRegistry: Send + Sync {
    /// Get the table currently registered under `table_id`
    ///
    /// The returned instance may differ from one resolved earlier under the
    /// same id if that table was destroyed and replaced.
    fn get_table(&self, table_id: TableId) -> Option<Arc<Table>>;
}

// ============================================================================
// Typing Notifier
// ============================================================================

/// Broadcasts typing transitions to the observers of a table
///
/// Called with the table lock held, so implementations must not block.
/// Delivery is best effort; failures are the notifier's own concern.
pub trait TypingNotifier: Send + Sync {
    fn notify_chat_typing(&self, table: &Table, state: &TableState, name: &str, typing: bool);
}

//! Command and message payloads

use serde::{Deserialize, Serialize};
use table_core::TableId;

/// Sent by the client whenever the user types into a table's chat box
///
/// ```json
/// { "tableID": 15103 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTypingPayload {
    #[serde(rename = "tableID")]
    pub table_id: TableId,
}

/// A non-fatal rejection shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningPayload {
    pub warning: String,
}

//! Typing transition event sent to everyone else at a table

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::TableId;

/// A participant started or stopped typing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTypingEvent {
    #[serde(rename = "tableID")]
    pub table_id: TableId,
    pub name: String,
    pub typing: bool,
    pub timestamp: DateTime<Utc>,
}

impl ChatTypingEvent {
    pub fn new(table_id: TableId, name: impl Into<String>, typing: bool) -> Self {
        Self {
            table_id,
            name: name.into(),
            typing,
            timestamp: Utc::now(),
        }
    }
}

//! Client and server message envelopes

use super::{ChatTypingPayload, WarningPayload};
use serde::{Deserialize, Serialize};
use table_core::ChatTypingEvent;

/// Commands a client may send
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "data", rename_all = "camelCase")]
pub enum ClientCommand {
    ChatTyping(ChatTypingPayload),
}

impl ClientCommand {
    /// Decode a command from its JSON text form
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Messages the gateway sends to a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "data", rename_all = "camelCase")]
pub enum ServerMessage {
    Warning(WarningPayload),
    ChatTyping(ChatTypingEvent),
}

impl ServerMessage {
    #[must_use]
    pub fn warning(text: impl Into<String>) -> Self {
        Self::Warning(WarningPayload {
            warning: text.into(),
        })
    }

    #[must_use]
    pub fn chat_typing(event: ChatTypingEvent) -> Self {
        Self::ChatTyping(event)
    }

    /// Encode to JSON text
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

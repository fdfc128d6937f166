//! Wire protocol between clients and the gateway
//!
//! Messages are JSON objects of the form `{"command": "...", "data": {...}}`.

mod messages;
mod payloads;

pub use messages::{ClientCommand, ServerMessage};
pub use payloads::{ChatTypingPayload, WarningPayload};

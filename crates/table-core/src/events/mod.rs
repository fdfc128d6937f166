//! Events emitted when typing state changes

mod chat_typing;

pub use chat_typing::ChatTypingEvent;

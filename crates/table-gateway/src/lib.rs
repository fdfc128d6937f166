//! # table-gateway
//!
//! Runtime side of the table server: live sessions, the in-memory table
//! registry, typing broadcasts, and handlers for inbound client commands.

pub mod broadcast;
pub mod connection;
pub mod handlers;
pub mod protocol;
pub mod server;
pub mod tables;

pub use broadcast::SessionNotifier;
pub use connection::{Session, SessionManager};
pub use handlers::{ChatTypingHandler, CommandDispatcher, HandlerError, HandlerResult};
pub use protocol::{ChatTypingPayload, ClientCommand, ServerMessage};
pub use server::GatewayState;
pub use tables::InMemoryTableRegistry;

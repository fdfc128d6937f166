//! # table-core
//!
//! Domain layer containing tables, participants, roster classification, domain
//! errors, typing events, and the collaborator traits the typing engine consumes.
//! This crate has no dependencies on transport or session infrastructure.

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Participant, Seat, Table, TableState};
pub use error::DomainError;
pub use events::ChatTypingEvent;
pub use traits::{TableRegistry, TypingNotifier};
pub use value_objects::{IdParseError, TableId, UserId};

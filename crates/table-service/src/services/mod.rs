//! Business logic services
//!
//! Services orchestrate domain operations on top of the collaborator traits
//! held by the `ServiceContext`.

pub mod context;
pub mod error;
pub mod typing;

// Re-export all services for convenience
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use typing::{ReconcileOutcome, TypingService, TypingTransition};

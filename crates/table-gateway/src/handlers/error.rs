//! Handler error types

use table_service::ServiceError;
use thiserror::Error;

/// Handler error type
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Invalid payload received
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Service error
    #[error("Service error: {0}")]
    ServiceError(#[from] ServiceError),
}

/// Handler result type
pub type HandlerResult<T> = Result<T, HandlerError>;

//! Service layer error types

use std::fmt;
use table_core::DomainError;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation
    Domain(DomainError),

    /// A delayed check could not be scheduled because no tokio runtime is running
    NoRuntime,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::NoRuntime => write!(f, "No async runtime available to schedule typing check"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::NoRuntime => None,
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl ServiceError {
    /// Get the error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::NoRuntime => "NO_RUNTIME",
        }
    }

    /// Whether the acting user was rejected (as opposed to an internal failure)
    pub fn is_rejection(&self) -> bool {
        match self {
            Self::Domain(e) => e.is_ineligible() || e.is_not_found(),
            Self::NoRuntime => false,
        }
    }

    /// Warning text shown to the user whose typing report was rejected
    pub fn warning_text(&self) -> String {
        match self {
            Self::Domain(DomainError::TableNotFound(table_id)) => {
                format!("Table {table_id} does not exist.")
            }
            Self::Domain(DomainError::NotAtTable { table_id }) => format!(
                "You are not playing or spectating at table {table_id}, so you cannot report that you are typing."
            ),
            Self::Domain(DomainError::NotSpectatingReplay { table_id }) => format!(
                "You are not spectating replay {table_id}, so you cannot report that you are typing."
            ),
            other => other.to_string(),
        }
    }
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{TableId, UserId};

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Table {0} does not exist")]
    TableNotFound(TableId),

    #[error("User {user_id} has no seat at table {table_id}")]
    ParticipantNotFound { table_id: TableId, user_id: UserId },

    // =========================================================================
    // Eligibility Errors
    // =========================================================================
    #[error("Not playing or spectating at table {table_id}")]
    NotAtTable { table_id: TableId },

    #[error("Not spectating replay {table_id}")]
    NotSpectatingReplay { table_id: TableId },
}

impl DomainError {
    /// Get an error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::TableNotFound(_) => "UNKNOWN_TABLE",
            Self::ParticipantNotFound { .. } => "UNKNOWN_PARTICIPANT",
            Self::NotAtTable { .. } => "NOT_AT_TABLE",
            Self::NotSpectatingReplay { .. } => "NOT_SPECTATING_REPLAY",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::TableNotFound(_) | Self::ParticipantNotFound { .. }
        )
    }

    /// Check if the acting user is not allowed to take part in the table chat
    pub fn is_ineligible(&self) -> bool {
        matches!(
            self,
            Self::NotAtTable { .. } | Self::NotSpectatingReplay { .. }
        )
    }
}

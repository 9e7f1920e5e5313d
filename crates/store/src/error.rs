//! Storage error types.

use thiserror::Error;

use fermata_core::leave::LeaveError;
use fermata_core::overwork::OverworkError;
use fermata_shared::error::AppError;
use fermata_shared::types::{FacultyId, LeaveRequestId};

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No faculty member with this ID exists.
    #[error("Faculty {0} not found")]
    UnknownFaculty(FacultyId),

    /// No leave request with this ID exists.
    #[error("Leave request {0} not found")]
    UnknownRequest(LeaveRequestId),

    /// A faculty member with this email already exists.
    #[error("Faculty with email {email} already exists")]
    DuplicateFaculty {
        /// The conflicting email address.
        email: String,
    },

    /// A leave operation was rejected.
    #[error(transparent)]
    Leave(#[from] LeaveError),

    /// An overwork operation was rejected.
    #[error(transparent)]
    Overwork(#[from] OverworkError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UnknownFaculty(_) | StoreError::UnknownRequest(_) => {
                Self::NotFound(err.to_string())
            }
            StoreError::DuplicateFaculty { .. } => Self::Conflict(err.to_string()),
            StoreError::Leave(ref leave) => match leave.status_code() {
                409 => Self::Conflict(err.to_string()),
                422 => Self::BusinessRule(err.to_string()),
                _ => Self::Validation(err.to_string()),
            },
            StoreError::Overwork(ref overwork) => match overwork.status_code() {
                422 => Self::BusinessRule(err.to_string()),
                _ => Self::Validation(err.to_string()),
            },
        }
    }
}

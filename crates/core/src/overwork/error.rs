//! Overwork error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during overwork operations.
#[derive(Debug, Error)]
pub enum OverworkError {
    /// Logged hours must be strictly positive.
    #[error("Invalid overwork hours: {hours}")]
    InvalidHours {
        /// The rejected hour amount.
        hours: Decimal,
    },

    /// Not enough pending hours to convert.
    #[error("Pending hours {pending} below conversion threshold {required}")]
    BelowThreshold {
        /// Hours currently pending.
        pending: Decimal,
        /// Minimum hours required for a conversion.
        required: Decimal,
    },
}

impl OverworkError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidHours { .. } => 400,
            Self::BelowThreshold { .. } => 422,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidHours { .. } => "INVALID_HOURS",
            Self::BelowThreshold { .. } => "BELOW_THRESHOLD",
        }
    }
}

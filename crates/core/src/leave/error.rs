//! Error types for leave operations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::leave::types::{LeaveCategory, LeaveStatus};

/// Errors that can occur during leave operations.
#[derive(Debug, Error)]
pub enum LeaveError {
    /// The end date precedes the start date.
    #[error("Invalid date range: end date {end} is before start date {start}")]
    InvalidRange {
        /// First day of the requested range.
        start: NaiveDate,
        /// Last day of the requested range.
        end: NaiveDate,
    },

    /// The requested duration exceeds the remaining balance.
    #[error("Insufficient {category} balance: requested {requested}, available {available}")]
    InsufficientBalance {
        /// The category the request draws from.
        category: LeaveCategory,
        /// Days requested.
        requested: Decimal,
        /// Days remaining in the category.
        available: Decimal,
    },

    /// The request already received a terminal decision.
    #[error("Request already processed: status is {status}")]
    AlreadyProcessed {
        /// The request's current status.
        status: LeaveStatus,
    },

    /// A reason is required but was not provided.
    #[error("Reason is required")]
    ReasonRequired,
}

impl LeaveError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidRange { .. } | Self::ReasonRequired => 400,
            Self::InsufficientBalance { .. } => 422,
            Self::AlreadyProcessed { .. } => 409,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRange { .. } => "INVALID_RANGE",
            Self::InsufficientBalance { .. } => "INSUFFICIENT_BALANCE",
            Self::AlreadyProcessed { .. } => "ALREADY_PROCESSED",
            Self::ReasonRequired => "REASON_REQUIRED",
        }
    }
}

//! Leave request lifecycle and balance accounting.
//!
//! This module implements the leave ledger:
//! - Request status transitions (Pending → Approved/Rejected)
//! - Per-category balance bookkeeping with a derived `left` field
//! - Duration computation from inclusive date ranges
//! - Error types for leave operations

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::LeaveError;
pub use service::LeaveService;
pub use types::{
    ApprovalOutcome, CategoryBalance, DayType, FacultyBalance, LeaveCategory, LeaveRequest,
    LeaveStatus, SubmitLeave,
};

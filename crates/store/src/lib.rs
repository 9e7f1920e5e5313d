//! Storage layer with the leave repository interface and in-memory store.
//!
//! This crate provides:
//! - The [`LeaveStore`] trait hiding persistence details from callers
//! - An in-memory implementation backed by per-faculty concurrent maps

pub mod error;
pub mod memory;

pub use error::StoreError;
pub use memory::MemoryStore;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fermata_core::leave::{FacultyBalance, LeaveRequest, SubmitLeave};
use fermata_core::overwork::{ConversionBreakdown, OverworkAccount};
use fermata_shared::types::{FacultyId, LeaveRequestId};

/// Identity details recorded when a faculty member is onboarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultyProfile {
    /// Full display name.
    pub full_name: String,
    /// Department the faculty member belongs to.
    pub department: String,
    /// Unique contact email.
    pub email: String,
}

/// Result of logging overwork hours.
///
/// `conversion` is present when the new total crossed the eligibility
/// threshold and an automatic conversion ran.
#[derive(Debug, Clone)]
pub struct OverworkLogResult {
    /// The account after logging (and any conversion).
    pub account: OverworkAccount,
    /// Breakdown of the conversion that ran, if one did.
    pub conversion: Option<ConversionBreakdown>,
}

/// Persistence interface for faculty, leave requests, and overwork.
///
/// Each method is a complete unit of work: validation runs against the
/// stored state and all resulting writes land atomically with respect
/// to other calls touching the same faculty member.
pub trait LeaveStore {
    /// Onboards a new faculty member with configured quota balances.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateFaculty`] when the email is
    /// already registered.
    fn create_faculty(&self, profile: FacultyProfile) -> Result<FacultyId, StoreError>;

    /// Returns the current per-category balances for a faculty member.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownFaculty`] when the ID is not registered.
    fn balance(&self, faculty_id: FacultyId) -> Result<FacultyBalance, StoreError>;

    /// Validates and records a new pending leave request.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownFaculty`] for an unregistered ID
    /// and [`StoreError::Leave`] when validation rejects the submission.
    fn submit_request(&self, input: SubmitLeave) -> Result<LeaveRequest, StoreError>;

    /// Approves a pending request and debits the category balance.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownRequest`] when the ID is not found
    /// and [`StoreError::Leave`] when the request is no longer pending.
    fn approve_request(
        &self,
        request_id: LeaveRequestId,
        comments: Option<String>,
    ) -> Result<LeaveRequest, StoreError>;

    /// Rejects a pending request, leaving balances untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownRequest`] when the ID is not found
    /// and [`StoreError::Leave`] when the request is no longer pending.
    fn reject_request(
        &self,
        request_id: LeaveRequestId,
        comments: Option<String>,
    ) -> Result<LeaveRequest, StoreError>;

    /// Looks up a single leave request by ID.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownRequest`] when the ID is not found.
    fn request(&self, request_id: LeaveRequestId) -> Result<LeaveRequest, StoreError>;

    /// Returns all requests for a faculty member, newest submission first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownFaculty`] when the ID is not registered.
    fn faculty_requests(&self, faculty_id: FacultyId) -> Result<Vec<LeaveRequest>, StoreError>;

    /// Logs overwork hours, converting automatically once eligible.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownFaculty`] for an unregistered ID
    /// and [`StoreError::Overwork`] for a non-positive hour amount.
    fn log_overwork(
        &self,
        faculty_id: FacultyId,
        hours: Decimal,
    ) -> Result<OverworkLogResult, StoreError>;

    /// Converts pending overwork hours into earned leave on demand.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownFaculty`] for an unregistered ID
    /// and [`StoreError::Overwork`] when too few hours are pending.
    fn convert_overwork(&self, faculty_id: FacultyId) -> Result<ConversionBreakdown, StoreError>;

    /// Returns the overwork account for a faculty member.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownFaculty`] when the ID is not registered.
    fn overwork_account(&self, faculty_id: FacultyId) -> Result<OverworkAccount, StoreError>;
}

//! Leave service for request state transitions and balance checks.
//!
//! This module implements the core state machine logic for moving
//! leave requests through the approval workflow and the associated
//! balance arithmetic.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use fermata_shared::types::LeaveRequestId;

use crate::leave::error::LeaveError;
use crate::leave::types::{
    ApprovalOutcome, DayType, FacultyBalance, LeaveCategory, LeaveRequest, LeaveStatus,
    SubmitLeave,
};

/// Stateless service for leave request workflow transitions.
///
/// All methods are associated functions over caller-supplied values;
/// they validate, then return updated copies for the caller to persist.
pub struct LeaveService;

impl LeaveService {
    /// Computes the leave days spanned by an inclusive date range.
    ///
    /// A single day counts as one calendar day, so the raw count is
    /// `end - start + 1`, weighted by the day type.
    ///
    /// # Errors
    ///
    /// Returns [`LeaveError::InvalidRange`] when `end` precedes `start`.
    pub fn compute_duration(
        start: NaiveDate,
        end: NaiveDate,
        day_type: DayType,
    ) -> Result<Decimal, LeaveError> {
        if end < start {
            return Err(LeaveError::InvalidRange { start, end });
        }
        let calendar_days = (end - start).num_days() + 1;
        Ok(Decimal::from(calendar_days) * day_type.weight())
    }

    /// Checks that a category has enough days left for a request.
    ///
    /// Advisory, submission-time only. Approval does not repeat it.
    ///
    /// # Errors
    ///
    /// Returns [`LeaveError::InsufficientBalance`] when `duration`
    /// exceeds the days left in the category.
    pub fn check_balance(
        balance: &FacultyBalance,
        category: LeaveCategory,
        duration: Decimal,
    ) -> Result<(), LeaveError> {
        let available = balance.category(category).left;
        if duration > available {
            return Err(LeaveError::InsufficientBalance {
                category,
                requested: duration,
                available,
            });
        }
        Ok(())
    }

    /// Validates a submission and builds a new Pending request.
    ///
    /// # Errors
    ///
    /// Returns [`LeaveError::InvalidRange`] for a backwards date range,
    /// [`LeaveError::ReasonRequired`] for a blank reason, and
    /// [`LeaveError::InsufficientBalance`] when the category cannot
    /// cover the requested duration.
    pub fn submit(
        input: SubmitLeave,
        balance: &FacultyBalance,
    ) -> Result<LeaveRequest, LeaveError> {
        let duration = Self::compute_duration(input.start_date, input.end_date, input.day_type)?;

        if input.reason.trim().is_empty() {
            return Err(LeaveError::ReasonRequired);
        }

        Self::check_balance(balance, input.category, duration)?;

        Ok(LeaveRequest {
            id: LeaveRequestId::new(),
            faculty_id: input.faculty_id,
            start_date: input.start_date,
            end_date: input.end_date,
            reason: input.reason,
            day_type: input.day_type,
            category: input.category,
            status: LeaveStatus::Pending,
            created_at: Utc::now(),
            approved_at: None,
            admin_comments: None,
        })
    }

    /// Approves a pending request, debiting the category balance.
    ///
    /// The duration is recomputed from the stored date range. The
    /// balance is NOT re-checked against the remaining days; the only
    /// balance check happens at submission time, so a balance can go
    /// negative when competing requests are approved.
    ///
    /// # Errors
    ///
    /// Returns [`LeaveError::AlreadyProcessed`] when the request is not
    /// Pending.
    pub fn approve(
        request: &LeaveRequest,
        balance: &FacultyBalance,
        comments: Option<String>,
    ) -> Result<ApprovalOutcome, LeaveError> {
        if request.status != LeaveStatus::Pending {
            return Err(LeaveError::AlreadyProcessed {
                status: request.status,
            });
        }

        let duration =
            Self::compute_duration(request.start_date, request.end_date, request.day_type)?;

        let mut updated_balance = balance.clone();
        updated_balance.category_mut(request.category).debit(duration);

        let mut updated_request = request.clone();
        updated_request.status = LeaveStatus::Approved;
        updated_request.approved_at = Some(Utc::now());
        updated_request.admin_comments = comments;

        Ok(ApprovalOutcome {
            request: updated_request,
            balance: updated_balance,
            duration,
        })
    }

    /// Rejects a pending request. Balances are untouched.
    ///
    /// Comments are optional; a rejection without explanation is valid.
    ///
    /// # Errors
    ///
    /// Returns [`LeaveError::AlreadyProcessed`] when the request is not
    /// Pending.
    pub fn reject(
        request: &LeaveRequest,
        comments: Option<String>,
    ) -> Result<LeaveRequest, LeaveError> {
        if request.status != LeaveStatus::Pending {
            return Err(LeaveError::AlreadyProcessed {
                status: request.status,
            });
        }

        let mut updated = request.clone();
        updated.status = LeaveStatus::Rejected;
        updated.admin_comments = comments;
        Ok(updated)
    }
}

//! Leave domain types for request lifecycle and balance accounting.
//!
//! This module defines the core types used for managing leave request
//! status transitions and per-category balance bookkeeping.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use fermata_shared::types::{FacultyId, LeaveRequestId};

/// Leave quota categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveCategory {
    /// Medical leave.
    Medical,
    /// Casual leave.
    Casual,
    /// Earned leave (accrued through overwork conversion).
    Earned,
}

impl LeaveCategory {
    /// All categories, in display order.
    pub const ALL: [Self; 3] = [Self::Medical, Self::Casual, Self::Earned];

    /// Returns the string representation of the category.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Medical => "medical",
            Self::Casual => "casual",
            Self::Earned => "earned",
        }
    }

    /// Parses a category from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "medical" => Some(Self::Medical),
            "casual" => Some(Self::Casual),
            "earned" => Some(Self::Earned),
            _ => None,
        }
    }
}

impl fmt::Display for LeaveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a request covers full or half days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Each calendar day counts as one leave day.
    FullDay,
    /// Each calendar day counts as half a leave day.
    HalfDay,
}

impl DayType {
    /// Returns the string representation of the day type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullDay => "full_day",
            Self::HalfDay => "half_day",
        }
    }

    /// Parses a day type from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "full_day" => Some(Self::FullDay),
            "half_day" => Some(Self::HalfDay),
            _ => None,
        }
    }

    /// Leave days consumed per calendar day.
    #[must_use]
    pub fn weight(&self) -> Decimal {
        match self {
            Self::FullDay => Decimal::ONE,
            Self::HalfDay => Decimal::new(5, 1),
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Leave request status in the approval workflow.
///
/// The valid transitions are:
/// - Pending → Approved (approve)
/// - Pending → Rejected (reject)
///
/// Approved and Rejected are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    /// Request has been submitted and awaits an admin decision.
    Pending,
    /// Request has been approved and the balance debited (immutable).
    Approved,
    /// Request has been rejected, balances untouched (immutable).
    Rejected,
}

impl LeaveStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Returns true if no further transitions are possible.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Balance for a single leave category.
///
/// `left` is derived and recomputed after every mutation, so
/// `left = total - used` holds at all times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBalance {
    /// Total days granted.
    pub total: Decimal,
    /// Days consumed by approved requests.
    pub used: Decimal,
    /// Days remaining (total - used).
    pub left: Decimal,
}

impl CategoryBalance {
    /// Creates a fresh balance with the given quota and nothing used.
    #[must_use]
    pub fn new(total: Decimal) -> Self {
        Self {
            total,
            used: Decimal::ZERO,
            left: total,
        }
    }

    /// Consumes days from the balance (approval).
    pub fn debit(&mut self, days: Decimal) {
        self.used += days;
        self.left = self.total - self.used;
    }

    /// Grants additional days to the balance (overwork conversion).
    pub fn credit(&mut self, days: Decimal) {
        self.total += days;
        self.left = self.total - self.used;
    }

    /// Returns true if the derived field matches the totals.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.left == self.total - self.used
    }
}

/// Per-category balances for one faculty member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyBalance {
    /// Medical leave balance.
    pub medical: CategoryBalance,
    /// Casual leave balance.
    pub casual: CategoryBalance,
    /// Earned leave balance.
    pub earned: CategoryBalance,
}

impl FacultyBalance {
    /// Creates balances from onboarding quotas.
    #[must_use]
    pub fn with_quotas(medical: Decimal, casual: Decimal, earned: Decimal) -> Self {
        Self {
            medical: CategoryBalance::new(medical),
            casual: CategoryBalance::new(casual),
            earned: CategoryBalance::new(earned),
        }
    }

    /// Returns the balance for a category.
    #[must_use]
    pub fn category(&self, category: LeaveCategory) -> &CategoryBalance {
        match category {
            LeaveCategory::Medical => &self.medical,
            LeaveCategory::Casual => &self.casual,
            LeaveCategory::Earned => &self.earned,
        }
    }

    /// Returns the mutable balance for a category.
    pub fn category_mut(&mut self, category: LeaveCategory) -> &mut CategoryBalance {
        match category {
            LeaveCategory::Medical => &mut self.medical,
            LeaveCategory::Casual => &mut self.casual,
            LeaveCategory::Earned => &mut self.earned,
        }
    }

    /// Returns true if every category balance is consistent.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        LeaveCategory::ALL
            .iter()
            .all(|c| self.category(*c).is_consistent())
    }
}

/// Input for submitting a new leave request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitLeave {
    /// The faculty member requesting leave.
    pub faculty_id: FacultyId,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Reason for the request (required).
    pub reason: String,
    /// Full or half days.
    pub day_type: DayType,
    /// Quota category to draw from.
    pub category: LeaveCategory,
}

/// A leave request with its full audit trail.
///
/// Duration is always derived from the date range and day type via
/// [`LeaveRequest::duration`], never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier.
    pub id: LeaveRequestId,
    /// The faculty member who requested leave.
    pub faculty_id: FacultyId,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Reason given at submission.
    pub reason: String,
    /// Full or half days.
    pub day_type: DayType,
    /// Quota category the request draws from.
    pub category: LeaveCategory,
    /// Current workflow status.
    pub status: LeaveStatus,
    /// When the request was submitted.
    pub created_at: DateTime<Utc>,
    /// When the request was approved, if it was.
    pub approved_at: Option<DateTime<Utc>>,
    /// Comments left by the deciding admin.
    pub admin_comments: Option<String>,
}

impl LeaveRequest {
    /// Leave days this request spans.
    ///
    /// Stored requests always satisfy `end_date >= start_date`.
    #[must_use]
    pub fn duration(&self) -> Decimal {
        let calendar_days = (self.end_date - self.start_date).num_days() + 1;
        Decimal::from(calendar_days.max(0)) * self.day_type.weight()
    }
}

/// Result of approving a leave request.
///
/// Carries updated copies for the caller to persist.
#[derive(Debug, Clone)]
pub struct ApprovalOutcome {
    /// The request with status, timestamp, and comments updated.
    pub request: LeaveRequest,
    /// The faculty balance with the category debited.
    pub balance: FacultyBalance,
    /// The number of days debited.
    pub duration: Decimal,
}

//! Report data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Approved leave days summed per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotals {
    /// Medical leave days taken.
    pub medical: Decimal,
    /// Casual leave days taken.
    pub casual: Decimal,
    /// Earned leave days taken.
    pub earned: Decimal,
}

/// Request tallies per workflow status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    /// Requests awaiting a decision.
    pub pending: usize,
    /// Approved requests.
    pub approved: usize,
    /// Rejected requests.
    pub rejected: usize,
}

impl StatusCounts {
    /// Total number of requests counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.pending + self.approved + self.rejected
    }
}

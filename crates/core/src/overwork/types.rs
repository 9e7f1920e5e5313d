//! Overwork domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::leave::types::CategoryBalance;

/// Accumulated overwork hours for one faculty member.
///
/// `pending_hours` never goes negative; `converted_hours` is the
/// cumulative audit trail of everything turned into earned leave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverworkAccount {
    /// Hours logged but not yet converted.
    pub pending_hours: Decimal,
    /// Total hours ever consumed by conversions.
    pub converted_hours: Decimal,
}

impl OverworkAccount {
    /// Creates an empty account.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending_hours: Decimal::ZERO,
            converted_hours: Decimal::ZERO,
        }
    }
}

impl Default for OverworkAccount {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic arithmetic result of one conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionBreakdown {
    /// Whole earned days granted (one per full eight-hour block).
    pub full_days: Decimal,
    /// Whether the leftover block of five or more hours earned a half day.
    pub half_day_bonus: bool,
    /// Earned days credited (full days plus an optional half).
    pub earned_days: Decimal,
    /// Hours consumed by this conversion.
    pub converted_hours: Decimal,
}

/// Result of converting pending overwork hours.
///
/// Carries updated copies for the caller to persist.
#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    /// The arithmetic breakdown of the conversion.
    pub breakdown: ConversionBreakdown,
    /// The account with hours moved from pending to converted.
    pub account: OverworkAccount,
    /// The earned-leave balance with the new days credited.
    pub earned: CategoryBalance,
}

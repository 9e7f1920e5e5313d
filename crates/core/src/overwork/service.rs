//! Overwork service for hour accumulation and earned-leave conversion.

use rust_decimal::Decimal;

use crate::leave::types::CategoryBalance;
use crate::overwork::error::OverworkError;
use crate::overwork::types::{ConversionBreakdown, ConversionOutcome, OverworkAccount};

/// Hours that make up one full earned day.
pub const FULL_DAY_HOURS: u32 = 8;

/// Hours in the leftover block that earns a half day.
pub const HALF_DAY_BLOCK_HOURS: u32 = 5;

/// Minimum pending hours before a conversion is allowed.
pub const CONVERSION_THRESHOLD_HOURS: u32 = 5;

/// Stateless service for overwork accounting.
///
/// All methods are associated functions over caller-supplied values;
/// they validate, then return updated copies for the caller to persist.
pub struct OverworkService;

impl OverworkService {
    /// Logs additional overwork hours onto an account.
    ///
    /// # Errors
    ///
    /// Returns [`OverworkError::InvalidHours`] unless `hours` is
    /// strictly positive.
    pub fn add_hours(
        account: &OverworkAccount,
        hours: Decimal,
    ) -> Result<OverworkAccount, OverworkError> {
        if hours <= Decimal::ZERO {
            return Err(OverworkError::InvalidHours { hours });
        }

        let mut updated = account.clone();
        updated.pending_hours += hours;
        Ok(updated)
    }

    /// Returns true if the account has enough pending hours to convert.
    #[must_use]
    pub fn is_eligible(account: &OverworkAccount) -> bool {
        account.pending_hours >= Decimal::from(CONVERSION_THRESHOLD_HOURS)
    }

    /// Converts pending hours into earned-leave days.
    ///
    /// Each full eight-hour block earns one day. A leftover block of
    /// five or more hours earns one extra half day and consumes five
    /// hours. Whatever remains stays pending and carries forward into
    /// the next conversion.
    ///
    /// # Errors
    ///
    /// Returns [`OverworkError::BelowThreshold`] when fewer than five
    /// hours are pending; nothing is changed in that case.
    pub fn convert(
        account: &OverworkAccount,
        earned: &CategoryBalance,
    ) -> Result<ConversionOutcome, OverworkError> {
        let pending = account.pending_hours;
        let threshold = Decimal::from(CONVERSION_THRESHOLD_HOURS);
        if pending < threshold {
            return Err(OverworkError::BelowThreshold {
                pending,
                required: threshold,
            });
        }

        let full_day = Decimal::from(FULL_DAY_HOURS);
        let half_block = Decimal::from(HALF_DAY_BLOCK_HOURS);

        let full_days = (pending / full_day).floor();
        let remainder = pending - full_days * full_day;
        let half_day_bonus = remainder >= half_block;

        let half_day = Decimal::new(5, 1);
        let earned_days = if half_day_bonus {
            full_days + half_day
        } else {
            full_days
        };
        let converted_hours = if half_day_bonus {
            full_days * full_day + half_block
        } else {
            full_days * full_day
        };

        let mut updated_account = account.clone();
        updated_account.pending_hours -= converted_hours;
        updated_account.converted_hours += converted_hours;

        let mut updated_earned = earned.clone();
        updated_earned.credit(earned_days);

        Ok(ConversionOutcome {
            breakdown: ConversionBreakdown {
                full_days,
                half_day_bonus,
                earned_days,
                converted_hours,
            },
            account: updated_account,
            earned: updated_earned,
        })
    }
}

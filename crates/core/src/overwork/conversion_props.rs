//! Property tests for the overwork conversion algorithm.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::leave::types::CategoryBalance;
use crate::overwork::service::OverworkService;
use crate::overwork::types::OverworkAccount;

/// Strategy for pending hours at or above the conversion threshold,
/// with one decimal place (5.0 to 300.0).
fn eligible_hours_strategy() -> impl Strategy<Value = Decimal> {
    (50i64..3000).prop_map(|n| Decimal::new(n, 1))
}

/// Strategy for positive hour increments with one decimal place.
fn increment_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..200).prop_map(|n| Decimal::new(n, 1))
}

fn account_with(pending: Decimal) -> OverworkAccount {
    OverworkAccount {
        pending_hours: pending,
        converted_hours: Decimal::ZERO,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A conversion never consumes more hours than were pending.
    #[test]
    fn prop_converted_never_exceeds_pending(pending in eligible_hours_strategy()) {
        let outcome = OverworkService::convert(
            &account_with(pending),
            &CategoryBalance::new(Decimal::ZERO),
        ).unwrap();
        prop_assert!(outcome.breakdown.converted_hours <= pending);
        prop_assert!(outcome.breakdown.converted_hours > Decimal::ZERO);
    }

    /// Pending hours never go negative and always drop below the
    /// threshold after a conversion, so the leftover carries forward.
    #[test]
    fn prop_leftover_below_threshold(pending in eligible_hours_strategy()) {
        let outcome = OverworkService::convert(
            &account_with(pending),
            &CategoryBalance::new(Decimal::ZERO),
        ).unwrap();
        prop_assert!(outcome.account.pending_hours >= Decimal::ZERO);
        prop_assert!(outcome.account.pending_hours < dec!(5));
        prop_assert_eq!(
            outcome.account.pending_hours,
            pending - outcome.breakdown.converted_hours
        );
    }

    /// The audit trail grows by exactly the consumed hours.
    #[test]
    fn prop_audit_trail_sums(pending in eligible_hours_strategy()) {
        let account = OverworkAccount {
            pending_hours: pending,
            converted_hours: dec!(40),
        };
        let outcome = OverworkService::convert(
            &account,
            &CategoryBalance::new(Decimal::ZERO),
        ).unwrap();
        prop_assert_eq!(
            outcome.account.converted_hours,
            dec!(40) + outcome.breakdown.converted_hours
        );
        // Hours are conserved across the pending/converted split.
        prop_assert_eq!(
            outcome.account.pending_hours + outcome.account.converted_hours,
            pending + dec!(40)
        );
    }

    /// Earned days follow the block arithmetic exactly.
    #[test]
    fn prop_earned_days_match_blocks(pending in eligible_hours_strategy()) {
        let outcome = OverworkService::convert(
            &account_with(pending),
            &CategoryBalance::new(Decimal::ZERO),
        ).unwrap();
        let bonus = if outcome.breakdown.half_day_bonus {
            dec!(0.5)
        } else {
            Decimal::ZERO
        };
        prop_assert_eq!(
            outcome.breakdown.earned_days,
            outcome.breakdown.full_days + bonus
        );
        let bonus_hours = if outcome.breakdown.half_day_bonus {
            dec!(5)
        } else {
            Decimal::ZERO
        };
        prop_assert_eq!(
            outcome.breakdown.converted_hours,
            outcome.breakdown.full_days * dec!(8) + bonus_hours
        );
    }

    /// The earned-leave credit keeps the category balance consistent.
    #[test]
    fn prop_credit_keeps_earned_consistent(
        pending in eligible_hours_strategy(),
        quota in 0i64..20,
    ) {
        let earned = CategoryBalance::new(Decimal::from(quota));
        let outcome = OverworkService::convert(&account_with(pending), &earned).unwrap();
        prop_assert!(outcome.earned.is_consistent());
        prop_assert_eq!(
            outcome.earned.total,
            earned.total + outcome.breakdown.earned_days
        );
        prop_assert_eq!(outcome.earned.used, earned.used);
    }

    /// Logging hours accumulates exactly and never errors for positive input.
    #[test]
    fn prop_add_hours_accumulates(
        increments in prop::collection::vec(increment_strategy(), 1..10),
    ) {
        let mut account = OverworkAccount::new();
        for hours in &increments {
            account = OverworkService::add_hours(&account, *hours).unwrap();
        }
        let total: Decimal = increments.iter().copied().sum();
        prop_assert_eq!(account.pending_hours, total);
        prop_assert_eq!(account.converted_hours, Decimal::ZERO);
    }
}

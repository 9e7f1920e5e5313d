//! Property tests for leave duration and balance arithmetic.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use fermata_shared::types::FacultyId;

use crate::leave::service::LeaveService;
use crate::leave::types::{
    CategoryBalance, DayType, FacultyBalance, LeaveCategory, SubmitLeave,
};

/// Strategy for generating arbitrary valid calendar dates.
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Strategy for generating an ordered (start, end) pair up to 60 days apart.
fn range_strategy() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (date_strategy(), 0i64..60).prop_map(|(start, span)| (start, start + Duration::days(span)))
}

fn day_type_strategy() -> impl Strategy<Value = DayType> {
    prop_oneof![Just(DayType::FullDay), Just(DayType::HalfDay)]
}

/// Strategy for day amounts with up to two decimal places.
fn days_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000).prop_map(|n| Decimal::new(n, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Duration of any valid range is strictly positive.
    #[test]
    fn prop_duration_positive(
        (start, end) in range_strategy(),
        day_type in day_type_strategy(),
    ) {
        let duration = LeaveService::compute_duration(start, end, day_type).unwrap();
        prop_assert!(duration > Decimal::ZERO);
    }

    /// Half-day weighting is exactly half the full-day duration.
    #[test]
    fn prop_half_day_is_half_of_full_day(
        (start, end) in range_strategy(),
    ) {
        let full = LeaveService::compute_duration(start, end, DayType::FullDay).unwrap();
        let half = LeaveService::compute_duration(start, end, DayType::HalfDay).unwrap();
        prop_assert_eq!(half * dec!(2), full);
    }

    /// Duration depends only on the span, not on where the range sits.
    #[test]
    fn prop_duration_shift_invariant(
        (start, end) in range_strategy(),
        shift in -365i64..365,
        day_type in day_type_strategy(),
    ) {
        let base = LeaveService::compute_duration(start, end, day_type).unwrap();
        let shifted = LeaveService::compute_duration(
            start + Duration::days(shift),
            end + Duration::days(shift),
            day_type,
        ).unwrap();
        prop_assert_eq!(base, shifted);
    }

    /// A backwards range is always rejected.
    #[test]
    fn prop_backwards_range_rejected(
        start in date_strategy(),
        span in 1i64..60,
        day_type in day_type_strategy(),
    ) {
        let end = start - Duration::days(span);
        let result = LeaveService::compute_duration(start, end, day_type);
        prop_assert!(result.is_err());
    }

    /// Debit preserves `left = total - used` and never touches `total`.
    #[test]
    fn prop_debit_keeps_balance_consistent(
        total in days_strategy(),
        amounts in prop::collection::vec(days_strategy(), 1..10),
    ) {
        let mut balance = CategoryBalance::new(total);
        for amount in &amounts {
            balance.debit(*amount);
            prop_assert!(balance.is_consistent());
        }
        let debited: Decimal = amounts.iter().copied().sum();
        prop_assert_eq!(balance.total, total);
        prop_assert_eq!(balance.used, debited);
        prop_assert_eq!(balance.left, total - debited);
    }

    /// Credit grows `total` and `left` by the same amount, `used` untouched.
    #[test]
    fn prop_credit_keeps_balance_consistent(
        total in days_strategy(),
        used in days_strategy(),
        credit in days_strategy(),
    ) {
        let mut balance = CategoryBalance::new(total);
        balance.debit(used);
        let left_before = balance.left;

        balance.credit(credit);
        prop_assert!(balance.is_consistent());
        prop_assert_eq!(balance.total, total + credit);
        prop_assert_eq!(balance.used, used);
        prop_assert_eq!(balance.left, left_before + credit);
    }

    /// Approval debits exactly the recomputed duration and leaves the
    /// original request and balance values untouched.
    #[test]
    fn prop_approve_debits_recomputed_duration(
        (start, end) in range_strategy(),
        day_type in day_type_strategy(),
    ) {
        // Quota large enough that any generated range fits.
        let balance = FacultyBalance::with_quotas(dec!(100), dec!(100), dec!(100));
        let input = SubmitLeave {
            faculty_id: FacultyId::new(),
            start_date: start,
            end_date: end,
            reason: "workshop".to_string(),
            day_type,
            category: LeaveCategory::Medical,
        };
        let request = LeaveService::submit(input, &balance).unwrap();
        let expected = request.duration();

        let outcome = LeaveService::approve(&request, &balance, None).unwrap();
        prop_assert_eq!(outcome.duration, expected);
        prop_assert_eq!(outcome.balance.medical.used, expected);
        prop_assert_eq!(outcome.balance.medical.left, dec!(100) - expected);
        prop_assert!(outcome.balance.is_consistent());

        // Inputs are untouched copies.
        prop_assert_eq!(balance.medical.used, Decimal::ZERO);
        prop_assert!(request.approved_at.is_none());
    }
}

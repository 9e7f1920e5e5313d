//! Report generation service.
//!
//! Pure aggregation over slices of leave requests. Only approved
//! requests count toward day totals; durations are always derived
//! from the stored date range.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::leave::types::{LeaveCategory, LeaveRequest, LeaveStatus};

use super::types::{CategoryTotals, StatusCounts};

/// Service for generating leave reports.
pub struct ReportService;

impl ReportService {
    /// Sums approved leave days per month of the given year.
    ///
    /// Walks each approved request's inclusive date range; a full-day
    /// request contributes 1.0 per calendar day, a half-day request
    /// 0.5. Days outside `year` are skipped, so a range spanning a
    /// year boundary only counts its days inside `year`.
    #[must_use]
    pub fn monthly_leave_days(requests: &[LeaveRequest], year: i32) -> [Decimal; 12] {
        let mut totals = [Decimal::ZERO; 12];

        for request in Self::approved(requests) {
            let weight = request.day_type.weight();
            for day in Self::days_of(request) {
                if day.year() == year {
                    totals[day.month0() as usize] += weight;
                }
            }
        }

        totals
    }

    /// Maps month to the sorted, de-duplicated days with approved leave.
    ///
    /// Months without any leave are absent from the map.
    #[must_use]
    pub fn leave_calendar(requests: &[LeaveRequest], year: i32) -> BTreeMap<u32, Vec<u32>> {
        let mut calendar: BTreeMap<u32, Vec<u32>> = BTreeMap::new();

        for request in Self::approved(requests) {
            for day in Self::days_of(request) {
                if day.year() == year {
                    calendar.entry(day.month()).or_default().push(day.day());
                }
            }
        }

        for days in calendar.values_mut() {
            days.sort_unstable();
            days.dedup();
        }

        calendar
    }

    /// Sums the derived durations of approved requests per category.
    #[must_use]
    pub fn category_totals(requests: &[LeaveRequest]) -> CategoryTotals {
        let mut totals = CategoryTotals::default();

        for request in Self::approved(requests) {
            let duration = request.duration();
            match request.category {
                LeaveCategory::Medical => totals.medical += duration,
                LeaveCategory::Casual => totals.casual += duration,
                LeaveCategory::Earned => totals.earned += duration,
            }
        }

        totals
    }

    /// Tallies requests per workflow status.
    #[must_use]
    pub fn status_counts(requests: &[LeaveRequest]) -> StatusCounts {
        let mut counts = StatusCounts::default();

        for request in requests {
            match request.status {
                LeaveStatus::Pending => counts.pending += 1,
                LeaveStatus::Approved => counts.approved += 1,
                LeaveStatus::Rejected => counts.rejected += 1,
            }
        }

        counts
    }

    /// Returns approved requests within optional date bounds, newest first.
    ///
    /// When given, `from` bounds the start date and `to` bounds the
    /// end date, both inclusive. Results are sorted by start date
    /// descending.
    #[must_use]
    pub fn filter_history(
        requests: &[LeaveRequest],
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Vec<LeaveRequest> {
        let mut history: Vec<LeaveRequest> = Self::approved(requests)
            .filter(|r| from.is_none_or(|f| r.start_date >= f))
            .filter(|r| to.is_none_or(|t| r.end_date <= t))
            .cloned()
            .collect();

        history.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        history
    }

    fn approved(requests: &[LeaveRequest]) -> impl Iterator<Item = &LeaveRequest> {
        requests
            .iter()
            .filter(|r| r.status == LeaveStatus::Approved)
    }

    fn days_of(request: &LeaveRequest) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = request.end_date;
        request.start_date.iter_days().take_while(move |d| *d <= end)
    }
}

//! In-memory store backed by a concurrent per-faculty map.
//!
//! Every mutation runs under the owning faculty member's map entry
//! guard, so operations touching the same faculty member serialize
//! and each balance update is atomic with its request update.

use dashmap::DashMap;
use rust_decimal::Decimal;
use tracing::info;

use fermata_core::leave::{FacultyBalance, LeaveRequest, LeaveService, SubmitLeave};
use fermata_core::overwork::{ConversionBreakdown, OverworkAccount, OverworkService};
use fermata_shared::config::QuotaConfig;
use fermata_shared::types::{FacultyId, LeaveRequestId};

use crate::error::StoreError;
use crate::{FacultyProfile, LeaveStore, OverworkLogResult};

/// Everything stored for one faculty member.
#[derive(Debug, Clone)]
struct FacultyRecord {
    profile: FacultyProfile,
    balance: FacultyBalance,
    overwork: OverworkAccount,
    requests: Vec<LeaveRequest>,
}

/// Thread-safe in-memory implementation of [`LeaveStore`].
#[derive(Debug)]
pub struct MemoryStore {
    quotas: QuotaConfig,
    faculty: DashMap<FacultyId, FacultyRecord>,
}

impl MemoryStore {
    /// Creates an empty store granting `quotas` to new faculty members.
    #[must_use]
    pub fn new(quotas: QuotaConfig) -> Self {
        Self {
            quotas,
            faculty: DashMap::new(),
        }
    }

    /// Finds which faculty member owns a request.
    ///
    /// Read-only scan; the caller re-locates the request under the
    /// owner's entry guard before mutating.
    fn owner_of(&self, request_id: LeaveRequestId) -> Option<FacultyId> {
        self.faculty.iter().find_map(|entry| {
            entry
                .value()
                .requests
                .iter()
                .any(|r| r.id == request_id)
                .then_some(*entry.key())
        })
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(QuotaConfig::default())
    }
}

impl LeaveStore for MemoryStore {
    fn create_faculty(&self, profile: FacultyProfile) -> Result<FacultyId, StoreError> {
        let duplicate = self
            .faculty
            .iter()
            .any(|entry| entry.value().profile.email.eq_ignore_ascii_case(&profile.email));
        if duplicate {
            return Err(StoreError::DuplicateFaculty {
                email: profile.email,
            });
        }

        let faculty_id = FacultyId::new();
        let record = FacultyRecord {
            profile,
            balance: FacultyBalance::with_quotas(
                self.quotas.medical,
                self.quotas.casual,
                self.quotas.earned,
            ),
            overwork: OverworkAccount::new(),
            requests: Vec::new(),
        };
        info!(%faculty_id, email = %record.profile.email, "faculty onboarded");
        self.faculty.insert(faculty_id, record);

        Ok(faculty_id)
    }

    fn balance(&self, faculty_id: FacultyId) -> Result<FacultyBalance, StoreError> {
        self.faculty
            .get(&faculty_id)
            .map(|record| record.balance.clone())
            .ok_or(StoreError::UnknownFaculty(faculty_id))
    }

    fn submit_request(&self, input: SubmitLeave) -> Result<LeaveRequest, StoreError> {
        let faculty_id = input.faculty_id;
        let mut record = self
            .faculty
            .get_mut(&faculty_id)
            .ok_or(StoreError::UnknownFaculty(faculty_id))?;

        let request = LeaveService::submit(input, &record.balance)?;
        info!(
            %faculty_id,
            request_id = %request.id,
            category = %request.category,
            duration = %request.duration(),
            "leave request submitted"
        );
        record.requests.push(request.clone());

        Ok(request)
    }

    fn approve_request(
        &self,
        request_id: LeaveRequestId,
        comments: Option<String>,
    ) -> Result<LeaveRequest, StoreError> {
        let faculty_id = self
            .owner_of(request_id)
            .ok_or(StoreError::UnknownRequest(request_id))?;
        let mut record = self
            .faculty
            .get_mut(&faculty_id)
            .ok_or(StoreError::UnknownRequest(request_id))?;

        let index = record
            .requests
            .iter()
            .position(|r| r.id == request_id)
            .ok_or(StoreError::UnknownRequest(request_id))?;

        let outcome = LeaveService::approve(&record.requests[index], &record.balance, comments)?;
        info!(
            %faculty_id,
            %request_id,
            category = %outcome.request.category,
            duration = %outcome.duration,
            left = %record.balance.category(outcome.request.category).left,
            "leave request approved"
        );
        record.balance = outcome.balance;
        record.requests[index] = outcome.request.clone();

        Ok(outcome.request)
    }

    fn reject_request(
        &self,
        request_id: LeaveRequestId,
        comments: Option<String>,
    ) -> Result<LeaveRequest, StoreError> {
        let faculty_id = self
            .owner_of(request_id)
            .ok_or(StoreError::UnknownRequest(request_id))?;
        let mut record = self
            .faculty
            .get_mut(&faculty_id)
            .ok_or(StoreError::UnknownRequest(request_id))?;

        let index = record
            .requests
            .iter()
            .position(|r| r.id == request_id)
            .ok_or(StoreError::UnknownRequest(request_id))?;

        let rejected = LeaveService::reject(&record.requests[index], comments)?;
        info!(%faculty_id, %request_id, "leave request rejected");
        record.requests[index] = rejected.clone();

        Ok(rejected)
    }

    fn request(&self, request_id: LeaveRequestId) -> Result<LeaveRequest, StoreError> {
        self.faculty
            .iter()
            .find_map(|entry| {
                entry
                    .value()
                    .requests
                    .iter()
                    .find(|r| r.id == request_id)
                    .cloned()
            })
            .ok_or(StoreError::UnknownRequest(request_id))
    }

    fn faculty_requests(&self, faculty_id: FacultyId) -> Result<Vec<LeaveRequest>, StoreError> {
        let record = self
            .faculty
            .get(&faculty_id)
            .ok_or(StoreError::UnknownFaculty(faculty_id))?;

        let mut requests = record.requests.clone();
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(requests)
    }

    fn log_overwork(
        &self,
        faculty_id: FacultyId,
        hours: Decimal,
    ) -> Result<OverworkLogResult, StoreError> {
        let mut record = self
            .faculty
            .get_mut(&faculty_id)
            .ok_or(StoreError::UnknownFaculty(faculty_id))?;

        record.overwork = OverworkService::add_hours(&record.overwork, hours)?;
        info!(
            %faculty_id,
            %hours,
            pending = %record.overwork.pending_hours,
            "overwork hours logged"
        );

        let conversion = if OverworkService::is_eligible(&record.overwork) {
            let outcome = OverworkService::convert(&record.overwork, &record.balance.earned)?;
            record.overwork = outcome.account;
            record.balance.earned = outcome.earned;
            info!(
                %faculty_id,
                earned_days = %outcome.breakdown.earned_days,
                converted_hours = %outcome.breakdown.converted_hours,
                "overwork hours converted to earned leave"
            );
            Some(outcome.breakdown)
        } else {
            None
        };

        Ok(OverworkLogResult {
            account: record.overwork.clone(),
            conversion,
        })
    }

    fn convert_overwork(&self, faculty_id: FacultyId) -> Result<ConversionBreakdown, StoreError> {
        let mut record = self
            .faculty
            .get_mut(&faculty_id)
            .ok_or(StoreError::UnknownFaculty(faculty_id))?;

        let outcome = OverworkService::convert(&record.overwork, &record.balance.earned)?;
        record.overwork = outcome.account;
        record.balance.earned = outcome.earned;
        info!(
            %faculty_id,
            earned_days = %outcome.breakdown.earned_days,
            converted_hours = %outcome.breakdown.converted_hours,
            "overwork hours converted to earned leave"
        );

        Ok(outcome.breakdown)
    }

    fn overwork_account(&self, faculty_id: FacultyId) -> Result<OverworkAccount, StoreError> {
        self.faculty
            .get(&faculty_id)
            .map(|record| record.overwork.clone())
            .ok_or(StoreError::UnknownFaculty(faculty_id))
    }
}

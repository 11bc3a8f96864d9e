//! Read-side queries. Every query returns owned copies; callers cannot
//! reach into the store's collection.

use jiff::Timestamp;

use triage_core::models::case::{CaseRecord, CaseStatus};
use triage_core::models::risk::{RiskLevel, UrgencyLevel};

use crate::store::CaseStore;

/// Highest score first. Stable, so equal scores keep store order
/// (newest first).
pub fn sort_by_risk(cases: &mut [CaseRecord]) {
    cases.sort_by(|a, b| b.risk_score.cmp(&a.risk_score));
}

/// Dashboard filters. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseFilter {
    /// Case-insensitive substring over patient name, patient id, chief
    /// complaint and case id.
    pub search: Option<String>,
    pub risk_level: Option<RiskLevel>,
    pub status: Option<CaseStatus>,
    pub assigned_to: Option<String>,
    /// Inclusive lower bound on arrival.
    pub arrived_from: Option<Timestamp>,
    /// Inclusive upper bound on arrival.
    pub arrived_to: Option<Timestamp>,
}

impl CaseFilter {
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    pub fn risk_level(mut self, level: RiskLevel) -> Self {
        self.risk_level = Some(level);
        self
    }

    pub fn status(mut self, status: CaseStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn assigned_to(mut self, staff: impl Into<String>) -> Self {
        self.assigned_to = Some(staff.into());
        self
    }

    pub fn arrived_between(mut self, from: Option<Timestamp>, to: Option<Timestamp>) -> Self {
        self.arrived_from = from;
        self.arrived_to = to;
        self
    }

    pub fn matches(&self, case: &CaseRecord) -> bool {
        if let Some(query) = self.search.as_deref().filter(|q| !q.is_empty()) {
            let query = query.to_lowercase();
            let hit = [
                &case.patient_name,
                &case.patient_id,
                &case.chief_complaint,
                &case.id,
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&query));
            if !hit {
                return false;
            }
        }
        if self.risk_level.is_some_and(|level| case.risk_level != level) {
            return false;
        }
        if self.status.is_some_and(|status| case.status != status) {
            return false;
        }
        if let Some(staff) = &self.assigned_to
            && case.assigned_to.as_ref() != Some(staff)
        {
            return false;
        }
        if self.arrived_from.is_some_and(|from| case.arrival_time < from) {
            return false;
        }
        if self.arrived_to.is_some_and(|to| case.arrival_time > to) {
            return false;
        }
        true
    }
}

impl CaseStore {
    /// Every case, highest risk score first.
    pub fn get_all_cases(&self) -> Vec<CaseRecord> {
        let mut cases = self.state().cases.clone();
        sort_by_risk(&mut cases);
        cases
    }

    pub fn get_case_by_id(&self, id: &str) -> Option<CaseRecord> {
        self.state().cases.iter().find(|c| c.id == id).cloned()
    }

    /// Cases with `status`, newest first.
    pub fn get_cases_by_status(&self, status: CaseStatus) -> Vec<CaseRecord> {
        self.collect(|c| c.status == status)
    }

    /// High-risk cases nobody has picked up yet.
    pub fn get_high_risk_new_cases(&self) -> Vec<CaseRecord> {
        self.collect(|c| c.risk_level == RiskLevel::High && c.status == CaseStatus::New)
    }

    /// Cases that arrived within the trailing window; the configured
    /// default window when `window_minutes` is `None`.
    pub fn get_recent_cases(&self, window_minutes: Option<i64>) -> Vec<CaseRecord> {
        let minutes = window_minutes.unwrap_or(self.config.recent_window_minutes);
        let cutoff = self
            .clock
            .now()
            .as_millisecond()
            .saturating_sub(minutes.saturating_mul(60_000));
        self.collect(|c| c.arrival_time.as_millisecond() >= cutoff)
    }

    /// Cases whose score puts them in the critical urgency tier, highest first.
    pub fn get_critical_cases(&self) -> Vec<CaseRecord> {
        let mut cases =
            self.collect(|c| UrgencyLevel::from_score(c.risk_score) == UrgencyLevel::Critical);
        sort_by_risk(&mut cases);
        cases
    }

    /// Cases matching `filter`, highest risk score first.
    pub fn filter_cases(&self, filter: &CaseFilter) -> Vec<CaseRecord> {
        let mut cases = self.collect(|c| filter.matches(c));
        sort_by_risk(&mut cases);
        cases
    }

    /// Distinct assignees across all cases, in dashboard order.
    pub fn assigned_staff(&self) -> Vec<String> {
        let mut staff: Vec<String> = Vec::new();
        for case in self.get_all_cases() {
            if let Some(name) = case.assigned_to
                && !staff.contains(&name)
            {
                staff.push(name);
            }
        }
        staff
    }

    /// Number of non-completed cases assigned to `staff`.
    pub fn active_case_count(&self, staff: &str) -> usize {
        self.state()
            .cases
            .iter()
            .filter(|c| c.is_active() && c.assigned_to.as_deref() == Some(staff))
            .count()
    }

    fn collect<P>(&self, predicate: P) -> Vec<CaseRecord>
    where
        P: Fn(&CaseRecord) -> bool,
    {
        self.state()
            .cases
            .iter()
            .filter(|&c| predicate(c))
            .cloned()
            .collect()
    }
}

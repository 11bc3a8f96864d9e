use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use triage_core::models::case::{CaseRecord, CaseStatus};
use triage_core::models::risk::RiskLevel;

use crate::store::CaseStore;

/// Dashboard counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStats {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub new_cases: usize,
    pub in_progress: usize,
    pub escalated: usize,
    pub completed: usize,
    /// Mean minutes since arrival over non-completed cases, floored.
    /// Zero when nothing is active.
    pub avg_wait_time: u64,
}

impl CaseStats {
    pub fn compute(cases: &[CaseRecord], now: Timestamp) -> Self {
        let by_level = |level: RiskLevel| cases.iter().filter(|c| c.risk_level == level).count();
        let by_status = |status: CaseStatus| cases.iter().filter(|c| c.status == status).count();

        let active: Vec<&CaseRecord> = cases.iter().filter(|c| c.is_active()).collect();
        let avg_wait_time = if active.is_empty() {
            0
        } else {
            let total: f64 = active.iter().map(|c| c.wait_minutes(now)).sum();
            (total / active.len() as f64).floor() as u64
        };

        Self {
            total: cases.len(),
            high: by_level(RiskLevel::High),
            medium: by_level(RiskLevel::Medium),
            low: by_level(RiskLevel::Low),
            new_cases: by_status(CaseStatus::New),
            in_progress: by_status(CaseStatus::InProgress),
            escalated: by_status(CaseStatus::Escalated),
            completed: by_status(CaseStatus::Completed),
            avg_wait_time,
        }
    }
}

impl CaseStore {
    pub fn get_case_stats(&self) -> CaseStats {
        let now = self.clock.now();
        CaseStats::compute(&self.state().cases, now)
    }
}

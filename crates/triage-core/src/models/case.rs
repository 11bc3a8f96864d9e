use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::risk::RiskLevel;
use super::timeline::TimelineEvent;
use super::vitals::Vitals;
use crate::error::CoreError;

/// A triage case: one patient visit from intake to completion.
///
/// `risk_score` and `vitals` are fixed at creation. Later changes go through
/// the store's status transitions, each of which appends to `timeline`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CaseRecord {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub age: u32,
    pub sex: Sex,
    pub chief_complaint: String,
    pub vitals: Vitals,
    pub medical_history: String,
    pub current_medications: String,
    pub allergies: String,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub ai_summary: String,
    pub ai_confidence: f64,
    pub status: CaseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub arrival_time: jiff::Timestamp,
    pub last_updated: jiff::Timestamp,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<String>,
    pub timeline: Vec<TimelineEvent>,
}

impl CaseRecord {
    /// Anything not yet completed counts toward queue load and wait time.
    pub fn is_active(&self) -> bool {
        self.status != CaseStatus::Completed
    }

    /// Whether `allergies` names an actual allergy rather than a
    /// "none" sentinel such as `None`, `None known` or `NKDA`.
    pub fn has_known_allergies(&self) -> bool {
        let normalized = self.allergies.trim().to_ascii_lowercase();
        !matches!(normalized.as_str(), "" | "none" | "none known" | "nkda" | "nka")
    }

    /// Fractional minutes elapsed between arrival and `now`, never negative.
    pub fn wait_minutes(&self, now: jiff::Timestamp) -> f64 {
        let elapsed = now.as_millisecond() - self.arrival_time.as_millisecond();
        (elapsed.max(0) as f64) / 60_000.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Sex {
    M,
    F,
    Other,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sex::M => "M",
            Sex::F => "F",
            Sex::Other => "Other",
        })
    }
}

impl FromStr for Sex {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "M" | "m" => Ok(Sex::M),
            "F" | "f" => Ok(Sex::F),
            "Other" | "other" => Ok(Sex::Other),
            _ => Err(CoreError::InvalidSex(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum CaseStatus {
    New,
    InProgress,
    Completed,
    Escalated,
}

impl CaseStatus {
    pub const ALL: [CaseStatus; 4] = [
        CaseStatus::New,
        CaseStatus::InProgress,
        CaseStatus::Completed,
        CaseStatus::Escalated,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CaseStatus::New => "new",
            CaseStatus::InProgress => "in-progress",
            CaseStatus::Completed => "completed",
            CaseStatus::Escalated => "escalated",
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| CoreError::InvalidStatus(s.to_string()))
    }
}

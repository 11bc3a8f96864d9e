//! Intake-side checks on a vitals snapshot.
//!
//! The scorer itself never rejects input. These checks back the intake form,
//! which refuses to submit until the core vitals are present and plausible.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use triage_core::models::vitals::Vitals;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum IssueKind {
    Missing,
    OutOfRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct VitalsIssue {
    pub field: String,
    pub kind: IssueKind,
    pub message: String,
}

impl VitalsIssue {
    fn missing(field: &str, name: &str) -> Self {
        Self {
            field: field.to_string(),
            kind: IssueKind::Missing,
            message: format!("{name} is required"),
        }
    }

    fn out_of_range(field: &str, name: &str, value: i32, min: i32, max: i32) -> Self {
        Self {
            field: field.to_string(),
            kind: IssueKind::OutOfRange,
            message: format!("{name} {value} is outside range [{min}, {max}]"),
        }
    }
}

/// Report every problem with `vitals`. An empty result means the snapshot
/// can be submitted.
pub fn validate_intake_vitals(vitals: &Vitals) -> Vec<VitalsIssue> {
    let required = [
        ("heartRate", "Heart rate", vitals.heart_rate),
        ("systolicBP", "Systolic blood pressure", vitals.systolic_bp),
        ("diastolicBP", "Diastolic blood pressure", vitals.diastolic_bp),
        ("respiratoryRate", "Respiratory rate", vitals.respiratory_rate),
        ("oxygenSaturation", "Oxygen saturation", vitals.oxygen_saturation),
    ];

    let mut issues: Vec<VitalsIssue> = required
        .iter()
        .filter(|(_, _, value)| !value.is_some_and(|v| v > 0))
        .map(|(field, name, _)| VitalsIssue::missing(field, name))
        .collect();

    let ranged = [
        ("oxygenSaturation", "Oxygen saturation", vitals.oxygen_saturation, 0, 100),
        ("painLevel", "Pain level", vitals.pain_level, 0, 10),
        ("gcsTotal", "GCS total", vitals.gcs_total, 3, 15),
    ];
    for (field, name, value, min, max) in ranged {
        if let Some(value) = value
            && !(min..=max).contains(&value)
        {
            issues.push(VitalsIssue::out_of_range(field, name, value, min, max));
        }
    }

    issues
}

//! Templated clinical summary attached to each new case.
//!
//! Fixed text per risk tier. There is no model call behind this.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use triage_core::models::intake::CaseIntake;
use triage_core::models::risk::RiskLevel;

pub const HIGH_CONFIDENCE: f64 = 0.92;
pub const MEDIUM_CONFIDENCE: f64 = 0.82;
pub const LOW_CONFIDENCE: f64 = 0.88;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalSummary {
    pub text: String,
    pub confidence: f64,
}

pub fn clinical_summary(intake: &CaseIntake, level: RiskLevel) -> ClinicalSummary {
    let patient = format!("{}{}", intake.age, intake.sex);
    let complaint = &intake.chief_complaint;

    match level {
        RiskLevel::High => {
            let vitals = &intake.vitals;
            let hr = reading(vitals.heart_rate.map(|v| v.to_string()));
            let bp = reading(vitals.blood_pressure().map(|bp| bp.to_string()));
            let spo2 = reading(vitals.oxygen_saturation.map(|v| format!("{v}%")));
            ClinicalSummary {
                text: format!(
                    "**CRITICAL:** {patient} presenting with {complaint}. Vitals concerning: \
                     HR {hr}, BP {bp}, SpO2 {spo2}. **Recommend:** Immediate evaluation, \
                     continuous monitoring."
                ),
                confidence: HIGH_CONFIDENCE,
            }
        }
        RiskLevel::Medium => ClinicalSummary {
            text: format!(
                "**MODERATE:** {patient} with {complaint}. Some abnormal vitals noted. \
                 **Recommend:** Priority evaluation within 30 minutes, reassess vitals."
            ),
            confidence: MEDIUM_CONFIDENCE,
        },
        RiskLevel::Low => ClinicalSummary {
            text: format!(
                "**LOW PRIORITY:** {patient} with {complaint}. Stable vitals. \
                 **Recommend:** Standard evaluation, may wait if higher priority cases present."
            ),
            confidence: LOW_CONFIDENCE,
        },
    }
}

fn reading(value: Option<String>) -> String {
    value.unwrap_or_else(|| "n/a".to_string())
}

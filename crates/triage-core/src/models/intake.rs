use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::case::Sex;
use super::vitals::Vitals;

/// The payload submitted by the intake form.
///
/// The form validates required vitals before submitting; the store trusts
/// what it receives. When `risk_score` is absent the store scores `vitals`
/// itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CaseIntake {
    pub patient_name: String,
    #[serde(default)]
    pub patient_id: Option<String>,
    pub age: u32,
    pub sex: Sex,
    pub chief_complaint: String,
    pub vitals: Vitals,
    pub medical_history: String,
    pub current_medications: String,
    pub allergies: String,
    #[serde(default)]
    pub risk_score: Option<u32>,
    #[serde(default)]
    pub attachments: Vec<String>,
}

impl CaseIntake {
    /// An intake with the form's defaults for the free-text history fields.
    pub fn new(
        patient_name: impl Into<String>,
        age: u32,
        sex: Sex,
        chief_complaint: impl Into<String>,
        vitals: Vitals,
    ) -> Self {
        Self {
            patient_name: patient_name.into(),
            patient_id: None,
            age,
            sex,
            chief_complaint: chief_complaint.into(),
            vitals,
            medical_history: "None".to_string(),
            current_medications: "None".to_string(),
            allergies: "None known".to_string(),
            risk_score: None,
            attachments: Vec::new(),
        }
    }

    pub fn with_patient_id(mut self, patient_id: impl Into<String>) -> Self {
        self.patient_id = Some(patient_id.into());
        self
    }

    pub fn with_risk_score(mut self, risk_score: u32) -> Self {
        self.risk_score = Some(risk_score);
        self
    }

    pub fn with_history(
        mut self,
        medical_history: impl Into<String>,
        current_medications: impl Into<String>,
        allergies: impl Into<String>,
    ) -> Self {
        self.medical_history = medical_history.into();
        self.current_medications = current_medications.into();
        self.allergies = allergies.into();
        self
    }
}

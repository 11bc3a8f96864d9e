use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid blood pressure '{0}': expected SYSTOLIC/DIASTOLIC")]
    InvalidBloodPressure(String),

    #[error("invalid AVPU code: {0}")]
    InvalidConsciousness(String),

    #[error("invalid case status: {0}")]
    InvalidStatus(String),

    #[error("invalid sex: {0}")]
    InvalidSex(String),

    #[error("invalid risk level: {0}")]
    InvalidRiskLevel(String),

    #[error("GCS {component} score {value} is outside range [1, {max}]")]
    InvalidGcsComponent {
        component: &'static str,
        value: u8,
        max: u8,
    },
}

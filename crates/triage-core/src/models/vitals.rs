use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A vitals snapshot taken at intake.
///
/// Every field is optional. Numeric vitals that are missing or `<= 0` count
/// as "not measured" and are skipped by the scorer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct Vitals {
    /// Beats per minute.
    pub heart_rate: Option<i32>,
    /// mmHg.
    #[serde(rename = "systolicBP")]
    pub systolic_bp: Option<i32>,
    /// mmHg.
    #[serde(rename = "diastolicBP")]
    pub diastolic_bp: Option<i32>,
    /// Degrees Fahrenheit.
    pub temperature: Option<f64>,
    /// Breaths per minute.
    pub respiratory_rate: Option<i32>,
    /// SpO2 percentage, 0–100.
    pub oxygen_saturation: Option<i32>,
    /// Self-reported pain, 0–10.
    pub pain_level: Option<i32>,
    pub consciousness: Option<Consciousness>,
    /// Glasgow Coma Scale total, 3–15.
    pub gcs_total: Option<i32>,
}

impl Vitals {
    /// The combined blood pressure, when both readings were taken.
    pub fn blood_pressure(&self) -> Option<BloodPressure> {
        match (self.systolic_bp, self.diastolic_bp) {
            (Some(systolic), Some(diastolic)) => Some(BloodPressure {
                systolic,
                diastolic,
            }),
            _ => None,
        }
    }

    pub fn with_blood_pressure(mut self, bp: BloodPressure) -> Self {
        self.systolic_bp = Some(bp.systolic);
        self.diastolic_bp = Some(bp.diastolic);
        self
    }

    pub fn with_gcs(mut self, gcs: GcsComponents) -> Self {
        self.gcs_total = Some(i32::from(gcs.total()));
        self
    }
}

/// A blood pressure reading written as `SYS/DIA`, e.g. `160/95`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BloodPressure {
    pub systolic: i32,
    pub diastolic: i32,
}

impl FromStr for BloodPressure {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidBloodPressure(s.to_string());
        let (systolic, diastolic) = s.trim().split_once('/').ok_or_else(invalid)?;
        Ok(Self {
            systolic: systolic.trim().parse().map_err(|_| invalid())?,
            diastolic: diastolic.trim().parse().map_err(|_| invalid())?,
        })
    }
}

impl fmt::Display for BloodPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.systolic, self.diastolic)
    }
}

/// AVPU responsiveness scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Consciousness {
    #[serde(rename = "A")]
    Alert,
    #[serde(rename = "V")]
    Voice,
    #[serde(rename = "P")]
    Pain,
    #[serde(rename = "U")]
    Unresponsive,
}

impl Consciousness {
    pub fn code(self) -> char {
        match self {
            Consciousness::Alert => 'A',
            Consciousness::Voice => 'V',
            Consciousness::Pain => 'P',
            Consciousness::Unresponsive => 'U',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Consciousness::Alert => "Alert",
            Consciousness::Voice => "Voice Responsive",
            Consciousness::Pain => "Pain Responsive",
            Consciousness::Unresponsive => "Unresponsive",
        }
    }
}

impl FromStr for Consciousness {
    type Err = CoreError;

    /// Accepts the single-letter code or the full word, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "alert" => Ok(Consciousness::Alert),
            "v" | "voice" => Ok(Consciousness::Voice),
            "p" | "pain" => Ok(Consciousness::Pain),
            "u" | "unresponsive" => Ok(Consciousness::Unresponsive),
            _ => Err(CoreError::InvalidConsciousness(s.to_string())),
        }
    }
}

/// Glasgow Coma Scale components: eye 1–4, verbal 1–5, motor 1–6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GcsComponents {
    eye: u8,
    verbal: u8,
    motor: u8,
}

impl GcsComponents {
    pub fn new(eye: u8, verbal: u8, motor: u8) -> Result<Self, CoreError> {
        for (component, value, max) in [("eye", eye, 4), ("verbal", verbal, 5), ("motor", motor, 6)]
        {
            if !(1..=max).contains(&value) {
                return Err(CoreError::InvalidGcsComponent {
                    component,
                    value,
                    max,
                });
            }
        }
        Ok(Self { eye, verbal, motor })
    }

    pub fn eye(&self) -> u8 {
        self.eye
    }

    pub fn verbal(&self) -> u8 {
        self.verbal
    }

    pub fn motor(&self) -> u8 {
        self.motor
    }

    pub fn total(&self) -> u8 {
        self.eye + self.verbal + self.motor
    }
}

/// Fully responsive patient (15), the intake form's starting point.
impl Default for GcsComponents {
    fn default() -> Self {
        Self {
            eye: 4,
            verbal: 5,
            motor: 6,
        }
    }
}

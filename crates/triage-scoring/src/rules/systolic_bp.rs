use triage_core::models::vitals::Vitals;

use crate::VitalRule;
use crate::bands::{Band, Bound};

/// Systolic blood pressure in mmHg. Hypotension bands are checked before
/// hypertension bands.
pub struct SystolicBp;

const BANDS: &[Band] = &[
    Band {
        label: "severe hypotension",
        points: 45,
        when: &[Bound::Below(70.0)],
    },
    Band {
        label: "hypotension",
        points: 30,
        when: &[Bound::Below(90.0)],
    },
    Band {
        label: "low blood pressure",
        points: 15,
        when: &[Bound::Below(100.0)],
    },
    Band {
        label: "hypertensive crisis",
        points: 30,
        when: &[Bound::Above(200.0)],
    },
    Band {
        label: "severe hypertension",
        points: 20,
        when: &[Bound::AtLeast(180.0)],
    },
    Band {
        label: "hypertension",
        points: 10,
        when: &[Bound::AtLeast(160.0)],
    },
];

impl VitalRule for SystolicBp {
    fn id(&self) -> &str {
        "systolic_bp"
    }

    fn name(&self) -> &str {
        "Systolic Blood Pressure"
    }

    fn bands(&self) -> &[Band] {
        BANDS
    }

    fn reading(&self, vitals: &Vitals) -> Option<f64> {
        vitals.systolic_bp.map(f64::from)
    }
}

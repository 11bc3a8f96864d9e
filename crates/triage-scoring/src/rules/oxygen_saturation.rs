use triage_core::models::vitals::Vitals;

use crate::VitalRule;
use crate::bands::{Band, Bound};

/// Peripheral oxygen saturation (SpO2), percent.
pub struct OxygenSaturation;

const BANDS: &[Band] = &[
    Band {
        label: "severe hypoxia",
        points: 50,
        when: &[Bound::Below(80.0)],
    },
    Band {
        label: "significant hypoxia",
        points: 40,
        when: &[Bound::Below(85.0)],
    },
    Band {
        label: "hypoxia",
        points: 30,
        when: &[Bound::Below(90.0)],
    },
    Band {
        label: "low saturation",
        points: 25,
        when: &[Bound::Below(92.0)],
    },
    Band {
        label: "borderline saturation",
        points: 10,
        when: &[Bound::Below(94.0)],
    },
];

impl VitalRule for OxygenSaturation {
    fn id(&self) -> &str {
        "oxygen_saturation"
    }

    fn name(&self) -> &str {
        "Oxygen Saturation"
    }

    fn bands(&self) -> &[Band] {
        BANDS
    }

    fn reading(&self, vitals: &Vitals) -> Option<f64> {
        vitals.oxygen_saturation.map(f64::from)
    }
}

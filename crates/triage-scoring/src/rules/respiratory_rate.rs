use triage_core::models::vitals::Vitals;

use crate::VitalRule;
use crate::bands::{Band, Bound};

/// Respiratory rate in breaths per minute.
pub struct RespiratoryRate;

const BANDS: &[Band] = &[
    Band {
        label: "severe tachypnea or apnea",
        points: 35,
        when: &[Bound::AtLeast(40.0), Bound::Below(6.0)],
    },
    Band {
        label: "tachypnea",
        points: 20,
        when: &[Bound::Above(30.0)],
    },
    Band {
        label: "mild tachypnea",
        points: 10,
        when: &[Bound::Above(24.0)],
    },
    Band {
        label: "bradypnea",
        points: 30,
        when: &[Bound::Below(8.0)],
    },
    Band {
        label: "mild bradypnea",
        points: 15,
        when: &[Bound::Below(10.0)],
    },
];

impl VitalRule for RespiratoryRate {
    fn id(&self) -> &str {
        "respiratory_rate"
    }

    fn name(&self) -> &str {
        "Respiratory Rate"
    }

    fn bands(&self) -> &[Band] {
        BANDS
    }

    fn reading(&self, vitals: &Vitals) -> Option<f64> {
        vitals.respiratory_rate.map(f64::from)
    }
}

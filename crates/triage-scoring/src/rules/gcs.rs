use triage_core::models::vitals::Vitals;

use crate::VitalRule;
use crate::bands::{Band, Bound};

/// Glasgow Coma Scale total, 3–15. Scored whenever present.
pub struct Gcs;

const BANDS: &[Band] = &[
    Band {
        label: "severe impairment",
        points: 45,
        when: &[Bound::Below(6.0)],
    },
    Band {
        label: "significant impairment",
        points: 35,
        when: &[Bound::Below(9.0)],
    },
    Band {
        label: "moderate impairment",
        points: 20,
        when: &[Bound::Below(12.0)],
    },
    Band {
        label: "mild impairment",
        points: 8,
        when: &[Bound::Below(14.0)],
    },
];

impl VitalRule for Gcs {
    fn id(&self) -> &str {
        "gcs"
    }

    fn name(&self) -> &str {
        "Glasgow Coma Scale"
    }

    fn bands(&self) -> &[Band] {
        BANDS
    }

    fn reading(&self, vitals: &Vitals) -> Option<f64> {
        vitals.gcs_total.map(f64::from)
    }

    fn requires_positive(&self) -> bool {
        false
    }
}

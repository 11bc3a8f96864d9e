use triage_core::models::vitals::Vitals;

use crate::VitalRule;
use crate::bands::{Band, Bound};

/// Heart rate in beats per minute.
pub struct HeartRate;

const BANDS: &[Band] = &[
    Band {
        label: "extreme tachycardia",
        points: 40,
        when: &[Bound::AtLeast(180.0)],
    },
    Band {
        label: "severe tachycardia",
        points: 25,
        when: &[Bound::AtLeast(150.0)],
    },
    Band {
        label: "tachycardia",
        points: 15,
        when: &[Bound::Above(120.0)],
    },
    Band {
        label: "severe bradycardia",
        points: 35,
        when: &[Bound::Below(40.0)],
    },
    Band {
        label: "bradycardia",
        points: 20,
        when: &[Bound::Below(50.0)],
    },
    Band {
        label: "mild abnormality",
        points: 5,
        when: &[Bound::Below(60.0), Bound::Above(100.0)],
    },
];

impl VitalRule for HeartRate {
    fn id(&self) -> &str {
        "heart_rate"
    }

    fn name(&self) -> &str {
        "Heart Rate"
    }

    fn bands(&self) -> &[Band] {
        BANDS
    }

    fn reading(&self, vitals: &Vitals) -> Option<f64> {
        vitals.heart_rate.map(f64::from)
    }
}

use triage_core::models::vitals::Vitals;

use crate::VitalRule;
use crate::bands::{Band, Bound};

/// Body temperature in degrees Fahrenheit.
pub struct Temperature;

const BANDS: &[Band] = &[
    // 40.5°C / 33.9°C
    Band {
        label: "severe hyperthermia or hypothermia",
        points: 35,
        when: &[Bound::Above(105.0), Bound::Below(93.0)],
    },
    // 40°C / 35°C
    Band {
        label: "high fever or hypothermia",
        points: 25,
        when: &[Bound::Above(104.0), Bound::Below(95.0)],
    },
    Band {
        label: "fever",
        points: 15,
        when: &[Bound::Above(102.2)],
    },
    Band {
        label: "low-grade fever",
        points: 5,
        when: &[Bound::Above(100.4)],
    },
    Band {
        label: "mild hypothermia",
        points: 15,
        when: &[Bound::Below(96.0)],
    },
];

impl VitalRule for Temperature {
    fn id(&self) -> &str {
        "temperature"
    }

    fn name(&self) -> &str {
        "Temperature"
    }

    fn bands(&self) -> &[Band] {
        BANDS
    }

    fn reading(&self, vitals: &Vitals) -> Option<f64> {
        vitals.temperature
    }
}

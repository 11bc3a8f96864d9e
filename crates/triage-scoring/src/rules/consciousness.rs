use triage_core::models::vitals::{Consciousness, Vitals};

use crate::VitalRule;
use crate::bands::{Band, Bound};

/// AVPU responsiveness. Read as an ordinal, Alert = 1 through
/// Unresponsive = 4; Alert adds nothing.
pub struct Avpu;

const BANDS: &[Band] = &[
    Band {
        label: "unresponsive",
        points: 40,
        when: &[Bound::AtLeast(4.0)],
    },
    Band {
        label: "responds to pain",
        points: 25,
        when: &[Bound::AtLeast(3.0)],
    },
    Band {
        label: "responds to voice",
        points: 12,
        when: &[Bound::AtLeast(2.0)],
    },
];

fn ordinal(level: Consciousness) -> f64 {
    match level {
        Consciousness::Alert => 1.0,
        Consciousness::Voice => 2.0,
        Consciousness::Pain => 3.0,
        Consciousness::Unresponsive => 4.0,
    }
}

impl VitalRule for Avpu {
    fn id(&self) -> &str {
        "consciousness"
    }

    fn name(&self) -> &str {
        "Consciousness (AVPU)"
    }

    fn bands(&self) -> &[Band] {
        BANDS
    }

    fn reading(&self, vitals: &Vitals) -> Option<f64> {
        vitals.consciousness.map(ordinal)
    }
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One side of a severity band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// value < x
    Below(f64),
    /// value > x
    Above(f64),
    /// value >= x
    AtLeast(f64),
}

impl Bound {
    pub fn matches(self, value: f64) -> bool {
        match self {
            Bound::Below(x) => value < x,
            Bound::Above(x) => value > x,
            Bound::AtLeast(x) => value >= x,
        }
    }
}

/// A severity band: matches when any of its bounds holds.
#[derive(Debug, Clone, Copy)]
pub struct Band {
    pub label: &'static str,
    pub points: u32,
    pub when: &'static [Bound],
}

impl Band {
    pub fn matches(&self, value: f64) -> bool {
        self.when.iter().any(|b| b.matches(value))
    }
}

/// A rule that contributed points to a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RuleHit {
    pub rule_id: String,
    pub rule_name: String,
    pub band: String,
    pub value: f64,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreBreakdown {
    pub hits: Vec<RuleHit>,
    /// Sum of all contributions before clamping.
    pub raw_total: u32,
    pub score: u8,
}

impl ScoreBreakdown {
    pub fn points_for(&self, rule_id: &str) -> u32 {
        self.hits
            .iter()
            .find(|h| h.rule_id == rule_id)
            .map_or(0, |h| h.points)
    }
}

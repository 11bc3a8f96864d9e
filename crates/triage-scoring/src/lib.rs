//! triage-scoring
//!
//! Rule-based vitals risk scoring. Pure functions with no store and no I/O.
//! Each vital is scored independently against its own severity bands and
//! the contributions are summed and clamped to 100.

pub mod bands;
pub mod rules;
pub mod summary;
pub mod validation;

use bands::{Band, RuleHit, ScoreBreakdown};
use triage_core::models::risk::{RiskLevel, UrgencyLevel};
use triage_core::models::vitals::Vitals;

pub const MAX_SCORE: u8 = 100;

/// Trait implemented by each vital sign that contributes to the score.
pub trait VitalRule: Send + Sync {
    /// Unique identifier for this rule (e.g., "heart_rate", "gcs").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "Heart Rate").
    fn name(&self) -> &str;

    /// Severity bands, most severe first. The first matching band wins.
    fn bands(&self) -> &[Band];

    /// The reading this rule scores, if it was recorded.
    fn reading(&self, vitals: &Vitals) -> Option<f64>;

    /// Whether a reading of zero or below means "not measured".
    fn requires_positive(&self) -> bool {
        true
    }

    /// Score this rule against a vitals snapshot.
    fn evaluate(&self, vitals: &Vitals) -> Option<RuleHit> {
        let value = self.reading(vitals)?;
        if self.requires_positive() && value <= 0.0 {
            return None;
        }
        let band = self.bands().iter().find(|b| b.matches(value))?;
        Some(RuleHit {
            rule_id: self.id().to_string(),
            rule_name: self.name().to_string(),
            band: band.label.to_string(),
            value,
            points: band.points,
        })
    }
}

/// Return all scoring rules, in evaluation order.
pub fn all_rules() -> Vec<Box<dyn VitalRule>> {
    vec![
        Box::new(rules::heart_rate::HeartRate),
        Box::new(rules::systolic_bp::SystolicBp),
        Box::new(rules::respiratory_rate::RespiratoryRate),
        Box::new(rules::oxygen_saturation::OxygenSaturation),
        Box::new(rules::temperature::Temperature),
        Box::new(rules::gcs::Gcs),
        Box::new(rules::consciousness::Avpu),
    ]
}

/// Look up a rule by ID.
pub fn get_rule(id: &str) -> Option<Box<dyn VitalRule>> {
    all_rules().into_iter().find(|r| r.id() == id)
}

/// Every rule that fired for `vitals`, with the clamped total.
pub fn score_breakdown(vitals: &Vitals) -> ScoreBreakdown {
    let hits: Vec<RuleHit> = all_rules()
        .iter()
        .filter_map(|rule| rule.evaluate(vitals))
        .collect();
    let raw_total: u32 = hits.iter().map(|h| h.points).sum();
    ScoreBreakdown {
        score: clamp_score(raw_total),
        raw_total,
        hits,
    }
}

/// Deterministic severity score in `[0, 100]`. Never fails: unrecorded
/// vitals are skipped.
pub fn calculate_risk_score(vitals: &Vitals) -> u8 {
    score_breakdown(vitals).score
}

/// Clamp any externally supplied score into `[0, 100]`.
pub fn clamp_score(raw: u32) -> u8 {
    raw.min(u32::from(MAX_SCORE)) as u8
}

/// 3-tier classification stored on a case.
pub fn risk_level(score: u8) -> RiskLevel {
    RiskLevel::from_score(score)
}

/// 4-tier classification shown on the urgency badge.
pub fn urgency_level(score: u8) -> UrgencyLevel {
    UrgencyLevel::from_score(score)
}

use triage_core::models::risk::{RiskLevel, UrgencyLevel};
use triage_core::models::vitals::{Consciousness, Vitals};
use triage_scoring::{
    all_rules, calculate_risk_score, get_rule, risk_level, score_breakdown, urgency_level,
};

fn heart_rate(hr: i32) -> Vitals {
    Vitals {
        heart_rate: Some(hr),
        ..Default::default()
    }
}

#[test]
fn empty_vitals_score_zero() {
    assert_eq!(calculate_risk_score(&Vitals::default()), 0);
    assert!(score_breakdown(&Vitals::default()).hits.is_empty());
}

#[test]
fn non_positive_readings_are_not_measured() {
    let vitals = Vitals {
        heart_rate: Some(0),
        systolic_bp: Some(-10),
        respiratory_rate: Some(0),
        oxygen_saturation: Some(0),
        temperature: Some(0.0),
        ..Default::default()
    };
    assert_eq!(calculate_risk_score(&vitals), 0);
}

#[test]
fn heart_rate_bands() {
    let cases = [
        (200, 40),
        (180, 40),
        (179, 25),
        (150, 25),
        (149, 15),
        (121, 15),
        (120, 5),
        (101, 5),
        (100, 0),
        (60, 0),
        (59, 5),
        (50, 5),
        (49, 20),
        (40, 20),
        (39, 35),
        (1, 35),
    ];
    for (hr, expected) in cases {
        assert_eq!(calculate_risk_score(&heart_rate(hr)), expected, "HR {hr}");
    }
}

#[test]
fn systolic_bp_bands() {
    let cases = [
        (50, 45),
        (69, 45),
        (70, 30),
        (89, 30),
        (90, 15),
        (99, 15),
        (100, 0),
        (159, 0),
        (160, 10),
        (179, 10),
        (180, 20),
        (200, 20),
        (201, 30),
    ];
    for (sbp, expected) in cases {
        let vitals = Vitals {
            systolic_bp: Some(sbp),
            ..Default::default()
        };
        assert_eq!(calculate_risk_score(&vitals), expected, "SBP {sbp}");
    }
}

#[test]
fn respiratory_rate_bands() {
    let cases = [
        (45, 35),
        (40, 35),
        (39, 20),
        (31, 20),
        (30, 10),
        (25, 10),
        (24, 0),
        (10, 0),
        (9, 15),
        (8, 15),
        (7, 30),
        (6, 30),
        (5, 35),
    ];
    for (rr, expected) in cases {
        let vitals = Vitals {
            respiratory_rate: Some(rr),
            ..Default::default()
        };
        assert_eq!(calculate_risk_score(&vitals), expected, "RR {rr}");
    }
}

#[test]
fn oxygen_saturation_bands() {
    let cases = [
        (70, 50),
        (79, 50),
        (80, 40),
        (84, 40),
        (85, 30),
        (89, 30),
        (90, 25),
        (91, 25),
        (92, 10),
        (93, 10),
        (94, 0),
        (100, 0),
    ];
    for (spo2, expected) in cases {
        let vitals = Vitals {
            oxygen_saturation: Some(spo2),
            ..Default::default()
        };
        assert_eq!(calculate_risk_score(&vitals), expected, "SpO2 {spo2}");
    }
}

#[test]
fn temperature_bands() {
    let cases = [
        (110.0, 35),
        (105.1, 35),
        (105.0, 25),
        (104.1, 25),
        (104.0, 15),
        (102.3, 15),
        (102.2, 5),
        (100.5, 5),
        (100.4, 0),
        (98.6, 0),
        (96.0, 0),
        (95.9, 15),
        (95.0, 15),
        (94.9, 25),
        (93.0, 25),
        (92.9, 35),
    ];
    for (temp, expected) in cases {
        let vitals = Vitals {
            temperature: Some(temp),
            ..Default::default()
        };
        assert_eq!(calculate_risk_score(&vitals), expected, "temp {temp}");
    }
}

#[test]
fn gcs_bands() {
    let cases = [(3, 45), (5, 45), (6, 35), (8, 35), (9, 20), (11, 20), (12, 8), (13, 8), (14, 0), (15, 0)];
    for (gcs, expected) in cases {
        let vitals = Vitals {
            gcs_total: Some(gcs),
            ..Default::default()
        };
        assert_eq!(calculate_risk_score(&vitals), expected, "GCS {gcs}");
    }
}

#[test]
fn gcs_is_scored_even_when_zero() {
    let vitals = Vitals {
        gcs_total: Some(0),
        ..Default::default()
    };
    assert_eq!(calculate_risk_score(&vitals), 45);
}

#[test]
fn consciousness_points() {
    let cases = [
        (Consciousness::Alert, 0),
        (Consciousness::Voice, 12),
        (Consciousness::Pain, 25),
        (Consciousness::Unresponsive, 40),
    ];
    for (level, expected) in cases {
        let vitals = Vitals {
            consciousness: Some(level),
            ..Default::default()
        };
        assert_eq!(calculate_risk_score(&vitals), expected, "{level:?}");
    }
}

#[test]
fn chest_pain_scenario_scores_25() {
    let vitals = Vitals {
        heart_rate: Some(112),
        systolic_bp: Some(160),
        oxygen_saturation: Some(92),
        respiratory_rate: Some(24),
        temperature: Some(98.6),
        ..Default::default()
    };
    let breakdown = score_breakdown(&vitals);
    assert_eq!(breakdown.points_for("heart_rate"), 5);
    assert_eq!(breakdown.points_for("systolic_bp"), 10);
    assert_eq!(breakdown.points_for("respiratory_rate"), 0);
    assert_eq!(breakdown.points_for("oxygen_saturation"), 10);
    assert_eq!(breakdown.points_for("temperature"), 0);
    assert_eq!(breakdown.score, 25);
    assert_eq!(calculate_risk_score(&vitals), 25);
    assert_eq!(urgency_level(25), UrgencyLevel::Low);
}

#[test]
fn everything_abnormal_clamps_to_100() {
    let vitals = Vitals {
        heart_rate: Some(200),
        systolic_bp: Some(50),
        respiratory_rate: Some(45),
        oxygen_saturation: Some(70),
        temperature: Some(110.0),
        gcs_total: Some(3),
        consciousness: Some(Consciousness::Unresponsive),
        ..Default::default()
    };
    let breakdown = score_breakdown(&vitals);
    assert_eq!(breakdown.raw_total, 40 + 45 + 35 + 50 + 35 + 45 + 40);
    assert_eq!(breakdown.score, 100);
    assert_eq!(breakdown.hits.len(), 7);
}

#[test]
fn urgency_boundary_is_inclusive_at_90() {
    assert_eq!(urgency_level(89), UrgencyLevel::High);
    assert_eq!(urgency_level(90), UrgencyLevel::Critical);
}

#[test]
fn risk_and_urgency_tables_stay_distinct() {
    // 95 is "high" in the stored 3-tier table but "critical" on the badge.
    assert_eq!(risk_level(95), RiskLevel::High);
    assert_eq!(urgency_level(95), UrgencyLevel::Critical);
    assert_eq!(risk_level(55), RiskLevel::Medium);
    assert_eq!(urgency_level(55), UrgencyLevel::Moderate);
}

#[test]
fn rules_are_registered_and_addressable() {
    let ids: Vec<String> = all_rules().iter().map(|r| r.id().to_string()).collect();
    assert_eq!(
        ids,
        [
            "heart_rate",
            "systolic_bp",
            "respiratory_rate",
            "oxygen_saturation",
            "temperature",
            "gcs",
            "consciousness"
        ]
    );
    let rule = get_rule("oxygen_saturation").unwrap();
    assert_eq!(rule.name(), "Oxygen Saturation");
    assert!(get_rule("blood_glucose").is_none());
}

#[test]
fn breakdown_reports_matched_band() {
    let breakdown = score_breakdown(&heart_rate(185));
    let hit = &breakdown.hits[0];
    assert_eq!(hit.rule_id, "heart_rate");
    assert_eq!(hit.band, "extreme tachycardia");
    assert_eq!(hit.value, 185.0);
    assert_eq!(hit.points, 40);
}

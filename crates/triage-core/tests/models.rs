use triage_core::ids;
use triage_core::models::case::{CaseStatus, Sex};
use triage_core::models::intake::CaseIntake;
use triage_core::models::risk::{RiskLevel, UrgencyLevel};
use triage_core::models::staff::{StaffRole, default_roster, roster_by_role};
use triage_core::models::vitals::{BloodPressure, Consciousness, GcsComponents, Vitals};

#[test]
fn blood_pressure_parses_and_formats() {
    let bp: BloodPressure = "160/95".parse().unwrap();
    assert_eq!(bp.systolic, 160);
    assert_eq!(bp.diastolic, 95);
    assert_eq!(bp.to_string(), "160/95");

    let spaced: BloodPressure = " 120 / 80 ".parse().unwrap();
    assert_eq!(spaced.to_string(), "120/80");
}

#[test]
fn blood_pressure_rejects_malformed_input() {
    assert!("160".parse::<BloodPressure>().is_err());
    assert!("abc/80".parse::<BloodPressure>().is_err());
    assert!("".parse::<BloodPressure>().is_err());
}

#[test]
fn vitals_combine_blood_pressure_only_when_both_present() {
    let vitals = Vitals {
        systolic_bp: Some(118),
        ..Default::default()
    };
    assert!(vitals.blood_pressure().is_none());

    let vitals = vitals.with_blood_pressure("118/75".parse().unwrap());
    assert_eq!(vitals.blood_pressure().unwrap().to_string(), "118/75");
}

#[test]
fn gcs_components_sum_and_validate() {
    let gcs = GcsComponents::new(2, 3, 4).unwrap();
    assert_eq!(gcs.total(), 9);
    assert_eq!(GcsComponents::default().total(), 15);

    assert!(GcsComponents::new(0, 5, 6).is_err());
    assert!(GcsComponents::new(4, 6, 6).is_err());
    assert!(GcsComponents::new(4, 5, 7).is_err());

    let vitals = Vitals::default().with_gcs(gcs);
    assert_eq!(vitals.gcs_total, Some(9));
}

#[test]
fn consciousness_accepts_codes_and_words() {
    assert_eq!("U".parse::<Consciousness>().unwrap(), Consciousness::Unresponsive);
    assert_eq!("voice".parse::<Consciousness>().unwrap(), Consciousness::Voice);
    assert_eq!(Consciousness::Pain.code(), 'P');
    assert!("X".parse::<Consciousness>().is_err());
}

#[test]
fn vitals_deserialize_with_missing_fields() {
    let vitals: Vitals =
        serde_json::from_str(r#"{"heartRate": 112, "consciousness": "V"}"#).unwrap();
    assert_eq!(vitals.heart_rate, Some(112));
    assert_eq!(vitals.consciousness, Some(Consciousness::Voice));
    assert!(vitals.temperature.is_none());
}

#[test]
fn vitals_use_intake_form_field_names() {
    let vitals: Vitals = serde_json::from_str(
        r#"{"systolicBP": 160, "diastolicBP": 95, "oxygenSaturation": 92, "gcsTotal": 14}"#,
    )
    .unwrap();
    assert_eq!(vitals.blood_pressure().unwrap().to_string(), "160/95");
    assert_eq!(vitals.oxygen_saturation, Some(92));
    assert_eq!(vitals.gcs_total, Some(14));

    let json = serde_json::to_value(&vitals).unwrap();
    assert_eq!(json["systolicBP"], 160);
    assert_eq!(json["diastolicBP"], 95);
}

#[test]
fn risk_level_thresholds() {
    assert_eq!(RiskLevel::from_score(100), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(70), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(69), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(50), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(49), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
    assert_eq!("HIGH".parse::<RiskLevel>().unwrap(), RiskLevel::High);
}

#[test]
fn urgency_level_thresholds() {
    assert_eq!(UrgencyLevel::from_score(90), UrgencyLevel::Critical);
    assert_eq!(UrgencyLevel::from_score(89), UrgencyLevel::High);
    assert_eq!(UrgencyLevel::from_score(70), UrgencyLevel::High);
    assert_eq!(UrgencyLevel::from_score(50), UrgencyLevel::Moderate);
    assert_eq!(UrgencyLevel::from_score(49), UrgencyLevel::Low);
    assert_eq!(UrgencyLevel::Critical.label(), "CRITICAL");
}

#[test]
fn case_status_wire_names() {
    assert_eq!(
        serde_json::to_string(&CaseStatus::InProgress).unwrap(),
        "\"in-progress\""
    );
    assert_eq!("escalated".parse::<CaseStatus>().unwrap(), CaseStatus::Escalated);
    assert!("closed".parse::<CaseStatus>().is_err());
}

#[test]
fn sex_round_trips_through_strings() {
    assert_eq!("Other".parse::<Sex>().unwrap(), Sex::Other);
    assert_eq!(Sex::F.to_string(), "F");
    assert!("X".parse::<Sex>().is_err());
}

#[test]
fn intake_defaults_history_fields() {
    let intake = CaseIntake::new("Jane R.", 40, Sex::F, "Headache", Vitals::default());
    assert_eq!(intake.medical_history, "None");
    assert_eq!(intake.allergies, "None known");
    assert!(intake.patient_id.is_none());
    assert!(intake.risk_score.is_none());
}

#[test]
fn ids_follow_padded_convention() {
    assert_eq!(ids::case_id(7), "CASE-0007");
    assert_eq!(ids::patient_id(7821), "PT-7821");
    assert_eq!(ids::case_id(12345), "CASE-12345");
    assert_eq!(ids::case_number("CASE-0042"), Some(42));
    assert_eq!(ids::patient_number("PT-1129"), Some(1129));
    assert_eq!(ids::case_number("PT-1129"), None);
}

#[test]
fn roster_filters_by_role() {
    let roster = default_roster();
    assert_eq!(roster.len(), 10);
    let nurses = roster_by_role(&roster, StaffRole::Nurse);
    assert_eq!(nurses.len(), 5);
    assert!(nurses.iter().all(|s| s.name.starts_with("RN ")));
}

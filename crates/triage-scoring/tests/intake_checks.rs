use triage_core::models::case::Sex;
use triage_core::models::intake::CaseIntake;
use triage_core::models::risk::RiskLevel;
use triage_core::models::vitals::Vitals;
use triage_scoring::summary::{HIGH_CONFIDENCE, LOW_CONFIDENCE, MEDIUM_CONFIDENCE, clinical_summary};
use triage_scoring::validation::{IssueKind, validate_intake_vitals};

fn complete_vitals() -> Vitals {
    Vitals {
        heart_rate: Some(88),
        systolic_bp: Some(145),
        diastolic_bp: Some(90),
        temperature: Some(98.4),
        respiratory_rate: Some(16),
        oxygen_saturation: Some(98),
        pain_level: Some(6),
        ..Default::default()
    }
}

#[test]
fn complete_vitals_pass_validation() {
    assert!(validate_intake_vitals(&complete_vitals()).is_empty());
}

#[test]
fn empty_vitals_report_each_required_field() {
    let issues = validate_intake_vitals(&Vitals::default());
    let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
    assert_eq!(
        fields,
        ["heartRate", "systolicBP", "diastolicBP", "respiratoryRate", "oxygenSaturation"]
    );
    assert!(issues.iter().all(|i| i.kind == IssueKind::Missing));
}

#[test]
fn implausible_values_are_out_of_range() {
    let vitals = Vitals {
        oxygen_saturation: Some(104),
        pain_level: Some(11),
        gcs_total: Some(2),
        ..complete_vitals()
    };
    let issues = validate_intake_vitals(&vitals);
    assert_eq!(issues.len(), 3);
    assert!(issues.iter().all(|i| i.kind == IssueKind::OutOfRange));
    assert_eq!(
        issues[0].to_string(),
        "Oxygen saturation 104 is outside range [0, 100]"
    );
}

#[test]
fn high_risk_summary_quotes_vitals() {
    let intake = CaseIntake::new("John D.", 68, Sex::M, "chest pain", complete_vitals());
    let summary = clinical_summary(&intake, RiskLevel::High);
    assert!(summary.text.starts_with("**CRITICAL:** 68M presenting with chest pain."));
    assert!(summary.text.contains("HR 88, BP 145/90, SpO2 98%"));
    assert_eq!(summary.confidence, HIGH_CONFIDENCE);
}

#[test]
fn summary_confidence_follows_tier() {
    let intake = CaseIntake::new("Maria G.", 34, Sex::F, "abdominal pain", Vitals::default());
    let medium = clinical_summary(&intake, RiskLevel::Medium);
    assert!(medium.text.starts_with("**MODERATE:** 34F with abdominal pain."));
    assert_eq!(medium.confidence, MEDIUM_CONFIDENCE);

    let low = clinical_summary(&intake, RiskLevel::Low);
    assert!(low.text.starts_with("**LOW PRIORITY:**"));
    assert_eq!(low.confidence, LOW_CONFIDENCE);
}

#[test]
fn high_risk_summary_marks_missing_vitals() {
    let intake = CaseIntake::new("Unknown Patient", 0, Sex::Other, "collapse", Vitals::default());
    let summary = clinical_summary(&intake, RiskLevel::High);
    assert!(summary.text.contains("HR n/a, BP n/a, SpO2 n/a"));
}

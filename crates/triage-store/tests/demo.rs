use jiff::{SignedDuration, Timestamp};
use triage_core::models::case::CaseStatus;
use triage_core::models::risk::RiskLevel;
use triage_store::demo::synthetic_cases;

fn now() -> Timestamp {
    "2026-03-01T12:00:00Z".parse().unwrap()
}

#[test]
fn ten_cases_with_sequential_ids() {
    let cases = synthetic_cases(now());
    let ids: Vec<&str> = cases.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids.len(), 10);
    assert_eq!(ids[0], "CASE-0001");
    assert_eq!(ids[9], "CASE-0010");
    assert_eq!(cases[0].patient_id, "PT-7821");
}

#[test]
fn levels_follow_scores() {
    for case in synthetic_cases(now()) {
        assert_eq!(case.risk_level, RiskLevel::from_score(case.risk_score), "{}", case.id);
    }
}

#[test]
fn times_are_relative_to_now() {
    let cases = synthetic_cases(now());
    assert_eq!(cases[0].arrival_time, now() - SignedDuration::from_mins(15));
    for case in &cases {
        assert!(case.arrival_time <= now());
        assert!(case.last_updated >= case.arrival_time);
        assert_eq!(case.timeline[0].timestamp, case.arrival_time);
        assert_eq!(case.last_updated, case.timeline.last().unwrap().timestamp);
    }
}

#[test]
fn completed_case_has_discharge_entry() {
    let cases = synthetic_cases(now());
    let done: Vec<_> = cases
        .iter()
        .filter(|c| c.status == CaseStatus::Completed)
        .collect();
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].assigned_to.as_deref(), Some("Dr. Wilson"));
    assert_eq!(done[0].timeline.len(), 3);
}

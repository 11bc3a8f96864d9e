use std::sync::Arc;

use jiff::Timestamp;
use proptest::prelude::*;
use triage_core::models::case::{CaseStatus, Sex};
use triage_core::models::intake::CaseIntake;
use triage_core::models::vitals::Vitals;
use triage_store::CaseStore;
use triage_store::clock::ManualClock;
use triage_store::config::StoreConfig;

fn status(n: u8) -> CaseStatus {
    CaseStatus::ALL[n as usize % CaseStatus::ALL.len()]
}

proptest! {
    #[test]
    fn listing_is_sorted_and_stats_add_up(
        ops in prop::collection::vec((0u32..130, 0u8..4, 0i64..30), 1..40)
    ) {
        let start: Timestamp = "2026-03-01T12:00:00Z".parse().unwrap();
        let clock = Arc::new(ManualClock::new(start));
        let store = CaseStore::new(StoreConfig::default(), clock.clone());

        for (score, next_status, wait) in &ops {
            let case = store.add_case(
                CaseIntake::new("Pat", 40, Sex::F, "x", Vitals::default())
                    .with_risk_score(*score),
            );
            store.update_case_status(&case.id, status(*next_status), None);
            clock.advance_minutes(*wait);
        }

        let cases = store.get_all_cases();
        prop_assert_eq!(cases.len(), ops.len());
        prop_assert!(cases.windows(2).all(|w| w[0].risk_score >= w[1].risk_score));
        prop_assert!(cases.iter().all(|c| c.risk_score <= 100));

        let stats = store.get_case_stats();
        prop_assert_eq!(stats.total, cases.len());
        prop_assert_eq!(stats.high + stats.medium + stats.low, stats.total);
        prop_assert_eq!(
            stats.new_cases + stats.in_progress + stats.escalated + stats.completed,
            stats.total
        );
        for c in &cases {
            prop_assert_eq!(c.timeline.len(), 2);
            prop_assert!(c.last_updated >= c.arrival_time);
        }
    }
}

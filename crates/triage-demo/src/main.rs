use std::sync::Arc;

use eyre::Result;
use jiff::tz::TimeZone;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use triage_core::models::case::{CaseStatus, Sex};
use triage_core::models::intake::CaseIntake;
use triage_core::models::staff::{StaffRole, default_roster, roster_by_role};
use triage_core::models::vitals::{BloodPressure, Consciousness, Vitals};
use triage_export::csv::cases_to_csv;
use triage_export::render::{HandoffSummary, render_handoff, render_wristband};
use triage_scoring::score_breakdown;
use triage_scoring::validation::validate_intake_vitals;
use triage_store::CaseStore;
use triage_store::clock::SystemClock;

mod config;

fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = config::load_config()?;
    init_tracing(config.json_logs);

    let store = Arc::new(CaseStore::from_config(config, Arc::new(SystemClock)));
    store
        .subscribe(|event| info!(case_id = %event.case_id(), ?event, "store changed"))
        .detach();

    let mut events = store.events();
    let watcher = tokio::spawn(async move {
        let mut seen = 0usize;
        loop {
            match events.recv().await {
                Ok(event) => {
                    debug!(case_id = %event.case_id(), "event received");
                    seen += 1;
                }
                Err(RecvError::Lagged(missed)) => warn!(missed, "event receiver lagged"),
                Err(RecvError::Closed) => break,
            }
        }
        seen
    });

    let vitals = Vitals {
        heart_rate: Some(128),
        temperature: Some(102.4),
        respiratory_rate: Some(26),
        oxygen_saturation: Some(89),
        pain_level: Some(6),
        consciousness: Some(Consciousness::Voice),
        ..Default::default()
    }
    .with_blood_pressure("88/54".parse::<BloodPressure>()?);

    for issue in validate_intake_vitals(&vitals) {
        warn!(field = %issue.field, "{issue}");
    }
    for hit in score_breakdown(&vitals).hits {
        info!(rule = %hit.rule_id, band = %hit.band, points = hit.points, "risk factor");
    }

    let intake = CaseIntake::new(
        "Walter P.",
        74,
        Sex::M,
        "Fever, confusion and low blood pressure since this morning",
        vitals,
    )
    .with_history("COPD, CKD stage 3", "Tiotropium, Furosemide", "Sulfa drugs");
    let case = store.add_case(intake);

    let roster = default_roster();
    let physicians = roster_by_role(&roster, StaffRole::Physician);
    let attending = physicians
        .first()
        .map(|staff| staff.name.as_str())
        .ok_or_else(|| eyre::eyre!("roster has no physicians"))?;
    let relief = physicians
        .get(1)
        .map(|staff| staff.name.as_str())
        .ok_or_else(|| eyre::eyre!("roster needs a second physician"))?;

    store.try_update_case_status(&case.id, CaseStatus::InProgress, Some(attending))?;
    store.escalate_case(&case.id);

    let moved = store.shift_handoff(attending, relief)?;
    let handed_over: Vec<_> = moved
        .iter()
        .filter_map(|id| store.get_case_by_id(id))
        .collect();

    let tz = TimeZone::system();
    println!(
        "{}",
        render_handoff(
            &HandoffSummary {
                from: attending,
                to: relief,
                cases: &handed_over,
            },
            store.now(),
            &tz,
        )?
    );
    if let Some(current) = store.get_case_by_id(&case.id) {
        println!("{}", render_wristband(&current, &tz)?);
    }

    println!("{}", serde_json::to_string_pretty(&store.get_case_stats())?);
    println!("{}", cases_to_csv(&store.get_critical_cases()));

    drop(store);
    let seen = watcher.await?;
    info!(events = seen, "done");

    Ok(())
}

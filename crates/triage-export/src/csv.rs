//! Case list export in the dashboard's CSV layout.

use jiff::civil::Date;
use tracing::debug;

use triage_core::models::case::CaseRecord;

pub const CSV_HEADERS: [&str; 10] = [
    "Case ID",
    "Patient Name",
    "Patient ID",
    "Age",
    "Sex",
    "Chief Complaint",
    "Risk Score",
    "Risk Level",
    "Status",
    "Arrival Time",
];

/// Header row plus one row per case, newline-separated, no trailing newline.
///
/// Patient name and chief complaint are always quoted; the other columns
/// never contain commas or quotes.
pub fn cases_to_csv(cases: &[CaseRecord]) -> String {
    let mut lines = Vec::with_capacity(cases.len() + 1);
    lines.push(CSV_HEADERS.join(","));
    for case in cases {
        lines.push(
            [
                case.id.clone(),
                quote(&case.patient_name),
                case.patient_id.clone(),
                case.age.to_string(),
                case.sex.to_string(),
                quote(&case.chief_complaint),
                case.risk_score.to_string(),
                case.risk_level.to_string(),
                case.status.to_string(),
                format!("{:.3}", case.arrival_time),
            ]
            .join(","),
        );
    }
    debug!(rows = cases.len(), "cases exported to csv");
    lines.join("\n")
}

/// `{stem}_{YYYY-MM-DD}.csv`
pub fn export_filename(stem: &str, date: Date) -> String {
    format!("{stem}_{date}.csv")
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

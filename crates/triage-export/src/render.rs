use jiff::Timestamp;
use jiff::tz::TimeZone;
use serde::Serialize;
use tera::{Context, Tera};

use triage_core::models::case::CaseRecord;

use crate::error::ExportError;

pub const WRISTBAND_TEMPLATE: &str = "\
═══════════════════════════════════════
PATIENT WRISTBAND - {{ id }}
═══════════════════════════════════════
Name: {{ patientName }}
Patient ID: {{ patientId }}
Age/Sex: {{ age }}y / {{ sex }}
Risk Level: {{ riskLevel | upper }} ({{ riskScore }})
Chief Complaint: {{ chiefComplaint }}
{% if allergies_known %}Allergies: {{ allergies }}
{% endif %}Arrival: {{ arrival }}
═══════════════════════════════════════
";

pub const HANDOFF_TEMPLATE: &str = "\
SHIFT HANDOFF
From: {{ from }}
To: {{ to }}
Time: {{ generated }}
Cases transferred: {{ cases | length }}
{% for c in cases %}
- {{ c.id }} {{ c.patientName }} | {{ c.riskLevel | upper }} ({{ c.riskScore }}) | {{ c.status }}
  {{ c.chiefComplaint }}
{%- endfor %}
";

/// Render a Tera template against any serializable value.
///
/// The value's fields become the template context variables. Names without
/// an `.html`/`.xml` suffix are rendered without autoescaping.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    value: &T,
) -> Result<String, ExportError> {
    let context = Context::from_value(serde_json::to_value(value)?)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;
    render_with(template_name, template_content, &context)
}

/// Render one of the built-in templates by name.
pub fn render_builtin<T: Serialize>(template_name: &str, value: &T) -> Result<String, ExportError> {
    let content = match template_name {
        "wristband.txt" => WRISTBAND_TEMPLATE,
        "handoff.txt" => HANDOFF_TEMPLATE,
        other => return Err(ExportError::TemplateNotFound(other.to_string())),
    };
    render_template(template_name, content, value)
}

/// Printable wristband for a case. `tz` controls how arrival is shown.
pub fn render_wristband(case: &CaseRecord, tz: &TimeZone) -> Result<String, ExportError> {
    let mut context = Context::from_value(serde_json::to_value(case)?)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;
    context.insert("arrival", &display_time(case.arrival_time, tz));
    context.insert("allergies_known", &case.has_known_allergies());
    render_with("wristband.txt", WRISTBAND_TEMPLATE, &context)
}

/// Input for [`render_handoff`].
#[derive(Debug, Clone, Serialize)]
pub struct HandoffSummary<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub cases: &'a [CaseRecord],
}

/// Handoff sheet listing the transferred cases.
pub fn render_handoff(
    summary: &HandoffSummary<'_>,
    at: Timestamp,
    tz: &TimeZone,
) -> Result<String, ExportError> {
    let mut context = Context::from_value(serde_json::to_value(summary)?)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;
    context.insert("generated", &display_time(at, tz));
    render_with("handoff.txt", HANDOFF_TEMPLATE, &context)
}

fn render_with(
    template_name: &str,
    template_content: &str,
    context: &Context,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let rendered = tera.render(template_name, context)?;
    Ok(rendered)
}

fn display_time(at: Timestamp, tz: &TimeZone) -> String {
    at.to_zoned(tz.clone()).strftime("%Y-%m-%d %H:%M %Z").to_string()
}

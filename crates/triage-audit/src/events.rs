use serde::Serialize;
use tracing::info;

/// Audit action names used by the case store.
pub mod action {
    pub const CASE_CREATED: &str = "case.created";
    pub const STATUS_CHANGED: &str = "case.status_changed";
    pub const SHIFT_HANDOFF: &str = "staff.shift_handoff";
}

/// A structured audit event for a case mutation.
///
/// The case timeline is the user-facing trail; these events are the
/// operator-facing one and go wherever the subscriber sends logs.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: String,
    pub resource_type: String,
    pub resource_id: String,
    pub actor: String,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(
        action: impl Into<String>,
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
        actor: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
            actor: actor.into(),
            details: None,
        }
    }

    /// Shorthand for an event on a single case.
    pub fn case(
        action: impl Into<String>,
        case_id: impl Into<String>,
        actor: impl Into<String>,
    ) -> Self {
        Self::new(action, "case", case_id, actor)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this audit event via tracing.
    pub fn emit(&self) {
        let details = self
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();
        info!(
            audit.action = %self.action,
            audit.resource_type = %self.resource_type,
            audit.resource_id = %self.resource_id,
            audit.actor = %self.actor,
            audit.details = %details,
            "audit event"
        );
    }
}

//! Intake and status transitions.

use serde_json::json;
use tracing::{debug, info};

use triage_audit::events::{AuditEvent, action};
use triage_core::models::case::{CaseRecord, CaseStatus};
use triage_core::models::intake::CaseIntake;
use triage_core::models::risk::RiskLevel;
use triage_core::models::timeline::{TimelineEvent, UserRole};
use triage_scoring::summary::clinical_summary;
use triage_scoring::{calculate_risk_score, clamp_score, risk_level};

use crate::bus::StoreEvent;
use crate::error::StoreError;
use crate::store::{CaseStore, StoreState};

/// A requested status transition.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    pub status: CaseStatus,
    pub assigned_to: Option<String>,
    /// Acting user and role; the configured system user when `None`.
    pub actor: Option<(String, UserRole)>,
}

impl StatusChange {
    pub fn new(status: CaseStatus) -> Self {
        Self {
            status,
            assigned_to: None,
            actor: None,
        }
    }

    /// Assign the case. An empty name leaves the current assignee in place.
    pub fn assign_to(mut self, staff: impl Into<String>) -> Self {
        let staff = staff.into();
        self.assigned_to = (!staff.is_empty()).then_some(staff);
        self
    }

    pub fn by(mut self, user: impl Into<String>, role: UserRole) -> Self {
        self.actor = Some((user.into(), role));
        self
    }

    fn describe(&self) -> String {
        match &self.assigned_to {
            Some(staff) => format!("Status changed to {}, assigned to {staff}", self.status),
            None => format!("Status changed to {}", self.status),
        }
    }
}

impl CaseStore {
    /// Create a case from an intake payload and notify listeners.
    ///
    /// The score is taken from the payload when present (clamped to 100),
    /// otherwise computed from the vitals. It is never recomputed.
    pub fn add_case(&self, intake: CaseIntake) -> CaseRecord {
        let risk_score = match intake.risk_score {
            Some(score) => clamp_score(score),
            None => calculate_risk_score(&intake.vitals),
        };
        let level = risk_level(risk_score);
        let summary = clinical_summary(&intake, level);
        let created_text = if level == RiskLevel::High {
            "Case created - HIGH PRIORITY"
        } else {
            "Case created"
        };

        let record = {
            let mut state = self.state();
            let now = self.clock.now();
            let id = state.allocate_case_id();
            let patient_id = match intake.patient_id {
                Some(patient_id) if !patient_id.is_empty() => patient_id,
                _ => state.allocate_patient_id(),
            };
            let record = CaseRecord {
                id,
                patient_id,
                patient_name: intake.patient_name,
                age: intake.age,
                sex: intake.sex,
                chief_complaint: intake.chief_complaint,
                vitals: intake.vitals,
                medical_history: intake.medical_history,
                current_medications: intake.current_medications,
                allergies: intake.allergies,
                risk_score,
                risk_level: level,
                ai_summary: summary.text,
                ai_confidence: summary.confidence,
                status: CaseStatus::New,
                assigned_to: None,
                arrival_time: now,
                last_updated: now,
                attachments: intake.attachments,
                timeline: vec![TimelineEvent::new(
                    now,
                    created_text,
                    &self.config.system_user,
                    self.config.system_role,
                )],
            };
            state.cases.insert(0, record.clone());
            record
        };

        info!(
            case_id = %record.id,
            risk_score = record.risk_score,
            risk_level = %record.risk_level,
            "case created"
        );
        AuditEvent::case(action::CASE_CREATED, &record.id, &self.config.system_user)
            .with_details(json!({
                "patient_id": record.patient_id,
                "risk_score": record.risk_score,
                "risk_level": record.risk_level,
            }))
            .emit();
        self.bus.publish(StoreEvent::CaseAdded {
            case_id: record.id.clone(),
            risk_score: record.risk_score,
            risk_level: record.risk_level,
        });
        record
    }

    /// Set a case's status, optionally assigning it.
    ///
    /// Unknown ids change nothing, but listeners are still notified with
    /// [`StoreEvent::Touched`]. Use [`Self::try_update_case_status`] to find
    /// out whether the case exists.
    pub fn update_case_status(&self, id: &str, status: CaseStatus, assigned_to: Option<&str>) {
        if let Err(e) = self.try_update_case_status(id, status, assigned_to) {
            debug!(case_id = %id, error = %e, "status update ignored");
            self.bus.publish(StoreEvent::Touched {
                case_id: id.to_string(),
            });
        }
    }

    pub fn try_update_case_status(
        &self,
        id: &str,
        status: CaseStatus,
        assigned_to: Option<&str>,
    ) -> Result<CaseRecord, StoreError> {
        let mut change = StatusChange::new(status);
        if let Some(staff) = assigned_to {
            change = change.assign_to(staff);
        }
        self.transition(id, change)
    }

    /// Apply a status change, append one timeline entry and notify.
    pub fn transition(&self, id: &str, change: StatusChange) -> Result<CaseRecord, StoreError> {
        let (updated, event) = {
            let mut state = self.state();
            self.apply(&mut state, id, &change)?
        };
        self.commit(vec![event]);
        Ok(updated)
    }

    pub fn escalate_case(&self, id: &str) {
        self.update_case_status(id, CaseStatus::Escalated, None);
    }

    /// Hand every active case of `from` over to `to`, keeping each case's
    /// status. Returns the ids of the transferred cases.
    pub fn shift_handoff(&self, from: &str, to: &str) -> Result<Vec<String>, StoreError> {
        if from.trim().is_empty() || to.trim().is_empty() {
            return Err(StoreError::InvalidHandoff(
                "both outgoing and incoming staff are required".to_string(),
            ));
        }
        if from == to {
            return Err(StoreError::InvalidHandoff(
                "cannot hand off to the same staff member".to_string(),
            ));
        }

        let events = {
            let mut state = self.state();
            let pending: Vec<(String, CaseStatus)> = state
                .cases
                .iter()
                .filter(|c| c.is_active() && c.assigned_to.as_deref() == Some(from))
                .map(|c| (c.id.clone(), c.status))
                .collect();
            let mut events = Vec::with_capacity(pending.len());
            for (id, status) in pending {
                let change = StatusChange::new(status).assign_to(to);
                let (_, event) = self.apply(&mut state, &id, &change)?;
                events.push(event);
            }
            events
        };

        let transferred: Vec<String> = events.iter().map(|e| e.case_id().to_string()).collect();
        info!(from, to, cases = transferred.len(), "shift handoff");
        AuditEvent::new(action::SHIFT_HANDOFF, "staff", from, &self.config.system_user)
            .with_details(json!({ "to": to, "cases": transferred }))
            .emit();
        self.commit(events);
        Ok(transferred)
    }

    fn apply(
        &self,
        state: &mut StoreState,
        id: &str,
        change: &StatusChange,
    ) -> Result<(CaseRecord, StoreEvent), StoreError> {
        let case = state
            .cases
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::CaseNotFound(id.to_string()))?;

        // Never step backwards, even if the clock does.
        let now = self.clock.now().max(case.last_updated);
        let (user, role) = change
            .actor
            .clone()
            .unwrap_or_else(|| (self.config.system_user.clone(), self.config.system_role));

        let from = case.status;
        case.status = change.status;
        if let Some(staff) = &change.assigned_to {
            case.assigned_to = Some(staff.clone());
        }
        case.last_updated = now;
        case.timeline
            .push(TimelineEvent::new(now, change.describe(), user.clone(), role));

        let event = StoreEvent::StatusChanged {
            case_id: case.id.clone(),
            from,
            to: change.status,
            assigned_to: change.assigned_to.clone(),
            changed_by: user,
        };
        Ok((case.clone(), event))
    }

    fn commit(&self, events: Vec<StoreEvent>) {
        for event in events {
            if let StoreEvent::StatusChanged {
                case_id,
                from,
                to,
                assigned_to,
                changed_by,
            } = &event
            {
                info!(case_id = %case_id, %from, %to, "case status changed");
                AuditEvent::case(action::STATUS_CHANGED, case_id, changed_by)
                    .with_details(json!({
                        "from": from,
                        "to": to,
                        "assigned_to": assigned_to,
                    }))
                    .emit();
            }
            self.bus.publish(event);
        }
    }
}

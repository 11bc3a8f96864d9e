use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// One entry in a case's audit trail. Never mutated once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TimelineEvent {
    pub id: Uuid,
    pub timestamp: jiff::Timestamp,
    pub event: String,
    pub user: String,
    pub role: UserRole,
}

impl TimelineEvent {
    pub fn new(
        timestamp: jiff::Timestamp,
        event: impl Into<String>,
        user: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            event: event.into(),
            user: user.into(),
            role,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum UserRole {
    #[default]
    TriageNurse,
    Doctor,
    Admin,
}

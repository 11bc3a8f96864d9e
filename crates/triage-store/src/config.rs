use std::path::Path;

use serde::{Deserialize, Serialize};

use triage_core::models::timeline::UserRole;

use crate::error::StoreError;

/// Current config version. Bump this when changing the shape.
const CURRENT_VERSION: u32 = 1;

pub const ENV_DEMO_MODE: &str = "TRIAGE_DEMO_MODE";
pub const ENV_RECENT_WINDOW: &str = "TRIAGE_RECENT_WINDOW_MINUTES";
pub const ENV_JSON_LOGS: &str = "TRIAGE_JSON_LOGS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Missing or 0 = pre-versioned config.
    pub config_version: u32,
    /// Seed the store with the synthetic demo cases.
    pub demo_mode: bool,
    /// Default window for recent-case queries.
    pub recent_window_minutes: i64,
    /// Broadcast channel capacity; slow receivers lag past this.
    pub event_capacity: usize,
    /// Recorded as the acting user on system-generated timeline entries.
    pub system_user: String,
    pub system_role: UserRole,
    pub json_logs: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            demo_mode: false,
            recent_window_minutes: 60,
            event_capacity: 256,
            system_user: "Triage System".to_string(),
            system_role: UserRole::TriageNurse,
            json_logs: false,
        }
    }
}

impl StoreConfig {
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, StoreError> {
        let config: StoreConfig = serde_json::from_str(contents)?;
        if config.config_version > CURRENT_VERSION {
            return Err(StoreError::Config(format!(
                "config_version {} is newer than this build supports ({CURRENT_VERSION})",
                config.config_version
            )));
        }
        Ok(Self {
            config_version: CURRENT_VERSION,
            ..config
        })
    }

    /// Apply `TRIAGE_*` environment overrides.
    pub fn apply_env(self) -> Result<Self, StoreError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup; [`Self::apply_env`] passes the
    /// process environment.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, StoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_DEMO_MODE) {
            self.demo_mode = parse_flag(ENV_DEMO_MODE, &value)?;
        }
        if let Some(value) = lookup(ENV_RECENT_WINDOW) {
            self.recent_window_minutes = value.trim().parse().map_err(|_| {
                StoreError::Config(format!("{ENV_RECENT_WINDOW}: expected minutes, got '{value}'"))
            })?;
        }
        if let Some(value) = lookup(ENV_JSON_LOGS) {
            self.json_logs = parse_flag(ENV_JSON_LOGS, &value)?;
        }
        Ok(self)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, StoreError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(StoreError::Config(format!(
            "{key}: expected a boolean, got '{value}'"
        ))),
    }
}

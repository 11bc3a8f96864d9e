use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::broadcast;
use tracing::info;

use triage_core::ids;
use triage_core::models::case::CaseRecord;

use crate::bus::{NotificationBus, StoreEvent, Subscription};
use crate::clock::{Clock, SystemClock};
use crate::config::StoreConfig;
use crate::demo;

/// The authoritative collection of triage cases.
///
/// Construct one at startup and share it by reference or `Arc`. All
/// mutations are serialized through a single lock; listeners are notified
/// after the lock is released.
pub struct CaseStore {
    pub(crate) state: Mutex<StoreState>,
    pub(crate) bus: NotificationBus,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) config: StoreConfig,
}

/// Cases are kept newest-first: intake prepends. Id counters wrap at
/// `u32::MAX`; allocation skips any id already in use.
pub(crate) struct StoreState {
    pub(crate) cases: Vec<CaseRecord>,
    next_case: u32,
    next_patient: u32,
}

impl StoreState {
    fn new(cases: Vec<CaseRecord>) -> Self {
        let next_case = cases
            .iter()
            .filter_map(|c| ids::case_number(&c.id))
            .max()
            .map_or(1, |n| n.wrapping_add(1));
        let next_patient = cases
            .iter()
            .filter_map(|c| ids::patient_number(&c.patient_id))
            .max()
            .map_or(1000, |n| n.wrapping_add(1));
        Self {
            cases,
            next_case,
            next_patient,
        }
    }

    pub(crate) fn allocate_case_id(&mut self) -> String {
        loop {
            let id = ids::case_id(self.next_case);
            self.next_case = self.next_case.wrapping_add(1);
            if !self.cases.iter().any(|c| c.id == id) {
                return id;
            }
        }
    }

    pub(crate) fn allocate_patient_id(&mut self) -> String {
        loop {
            let id = ids::patient_id(self.next_patient);
            self.next_patient = self.next_patient.wrapping_add(1);
            if !self.cases.iter().any(|c| c.patient_id == id) {
                return id;
            }
        }
    }
}

impl CaseStore {
    pub fn new(config: StoreConfig, clock: Arc<dyn Clock>) -> Self {
        Self::with_cases(config, clock, Vec::new())
    }

    /// A store seeded with `cases`, taken as newest-first.
    pub fn with_cases(config: StoreConfig, clock: Arc<dyn Clock>, cases: Vec<CaseRecord>) -> Self {
        info!(cases = cases.len(), "case store initialised");
        Self {
            state: Mutex::new(StoreState::new(cases)),
            bus: NotificationBus::new(config.event_capacity),
            clock,
            config,
        }
    }

    /// A store seeded with the demo cases when `demo_mode` is set.
    pub fn from_config(config: StoreConfig, clock: Arc<dyn Clock>) -> Self {
        let cases = if config.demo_mode {
            demo::synthetic_cases(clock.now())
        } else {
            Vec::new()
        };
        Self::with_cases(config, clock, cases)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn now(&self) -> jiff::Timestamp {
        self.clock.now()
    }

    /// Register a listener for every subsequent mutation.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&StoreEvent) + Send + Sync + 'static,
    {
        self.bus.subscribe(listener)
    }

    /// Broadcast receiver for every subsequent mutation.
    pub fn events(&self) -> broadcast::Receiver<StoreEvent> {
        self.bus.receiver()
    }

    pub fn listener_count(&self) -> usize {
        self.bus.listener_count()
    }

    pub fn len(&self) -> usize {
        self.state().cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state().cases.is_empty()
    }

    // The lock is never held across a panic point that could leave the
    // collection half-written, so a poisoned guard is still consistent.
    pub(crate) fn state(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CaseStore {
    fn default() -> Self {
        Self::new(StoreConfig::default(), Arc::new(SystemClock))
    }
}

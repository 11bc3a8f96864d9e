//! Change notification for the case store.
//!
//! Two ways to listen: synchronous callbacks, invoked in registration order
//! before the mutating call returns, and a `tokio` broadcast channel for
//! consumers that prefer to read events from a task. Each event is broadcast
//! before any callback runs, so the channel sees events in commit order even
//! when a callback mutates the store.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use serde::Serialize;
use tokio::sync::broadcast;

use triage_core::models::case::CaseStatus;
use triage_core::models::risk::RiskLevel;

/// What changed. One event per committed mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    CaseAdded {
        case_id: String,
        risk_score: u8,
        risk_level: RiskLevel,
    },
    StatusChanged {
        case_id: String,
        from: CaseStatus,
        to: CaseStatus,
        assigned_to: Option<String>,
        /// Acting user recorded on the timeline entry.
        changed_by: String,
    },
    /// A lenient update named a case that does not exist. Nothing changed.
    Touched { case_id: String },
}

impl StoreEvent {
    pub fn case_id(&self) -> &str {
        match self {
            StoreEvent::CaseAdded { case_id, .. }
            | StoreEvent::StatusChanged { case_id, .. }
            | StoreEvent::Touched { case_id } => case_id,
        }
    }
}

type Listener = Arc<dyn Fn(&StoreEvent) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct NotificationBus {
    registry: Arc<Mutex<Registry>>,
    sender: broadcast::Sender<StoreEvent>,
}

impl NotificationBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            registry: Arc::new(Mutex::new(Registry::default())),
            sender,
        }
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&StoreEvent) + Send + Sync + 'static,
    {
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Arc::new(listener)));
        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// A receiver that sees every event published from now on.
    pub fn receiver(&self) -> broadcast::Receiver<StoreEvent> {
        self.sender.subscribe()
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.registry).listeners.len()
    }

    /// Broadcast, then run every listener.
    ///
    /// Listeners run on a snapshot of the registry with no lock held, so
    /// they may call back into the store or (un)subscribe. Callbacks see a
    /// nested call's event as soon as it commits; only the broadcast channel
    /// is strictly in commit order.
    pub(crate) fn publish(&self, event: StoreEvent) {
        // Err only means nobody holds a receiver right now.
        let _ = self.sender.send(event.clone());

        let listeners: Vec<Listener> = lock(&self.registry)
            .listeners
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&event);
        }
    }
}

/// Handle for a registered listener. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes the listener"]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    /// Remove this listener. Calling it again is a no-op.
    pub fn unsubscribe(&self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry).listeners.retain(|(id, _)| *id != self.id);
        }
    }

    /// Keep the listener registered for the life of the store.
    pub fn detach(mut self) {
        self.registry = Weak::new();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

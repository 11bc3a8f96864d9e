//! triage-store
//!
//! In-memory case repository: intake, status transitions, queries and
//! statistics, with synchronous listeners and a broadcast channel so views
//! re-render on every mutation.

pub mod bus;
pub mod clock;
pub mod config;
pub mod demo;
pub mod error;
pub mod mutate;
pub mod query;
pub mod stats;
pub mod store;

pub use bus::{StoreEvent, Subscription};
pub use store::CaseStore;

//! triage-core
//!
//! Pure domain types and id conventions for the emergency triage dashboard.
//! No I/O. Shared by the scorer, the case store and the TypeScript view layer.

pub mod error;
pub mod ids;
pub mod models;

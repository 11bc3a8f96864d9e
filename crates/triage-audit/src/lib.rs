//! triage-audit
//!
//! Structured audit events for case mutations, emitted through `tracing`.

pub mod events;

//! triage-export
//!
//! CSV case lists and plain-text documents rendered from templates.

pub mod csv;
pub mod error;
pub mod render;

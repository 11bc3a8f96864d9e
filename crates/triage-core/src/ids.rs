//! Case and patient identifier conventions.
//!
//! Identifiers are `CASE-####` and `PT-####`: a fixed prefix followed by a
//! zero-padded sequence number. Numbers above 9999 simply widen.

pub const CASE_PREFIX: &str = "CASE-";

pub const PATIENT_PREFIX: &str = "PT-";

pub fn case_id(number: u32) -> String {
    format!("{CASE_PREFIX}{number:04}")
}

pub fn patient_id(number: u32) -> String {
    format!("{PATIENT_PREFIX}{number:04}")
}

/// Sequence number of a `CASE-####` id, if it follows the convention.
pub fn case_number(id: &str) -> Option<u32> {
    id.strip_prefix(CASE_PREFIX)?.parse().ok()
}

/// Sequence number of a `PT-####` id, if it follows the convention.
pub fn patient_number(id: &str) -> Option<u32> {
    id.strip_prefix(PATIENT_PREFIX)?.parse().ok()
}

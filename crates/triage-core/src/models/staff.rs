use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A member of the department who can be assigned to cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    pub role: StaffRole,
    pub specialty: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum StaffRole {
    Physician,
    Nurse,
}

/// The department roster offered by the assignment dropdown.
pub fn default_roster() -> Vec<StaffMember> {
    [
        ("dr-smith", "Dr. Smith", StaffRole::Physician, "Emergency Medicine"),
        ("dr-johnson", "Dr. Johnson", StaffRole::Physician, "Cardiology"),
        ("dr-patel", "Dr. Patel", StaffRole::Physician, "Internal Medicine"),
        ("dr-lee", "Dr. Lee", StaffRole::Physician, "Emergency Medicine"),
        ("dr-chen", "Dr. Chen", StaffRole::Physician, "Pulmonology"),
        ("nurse-williams", "RN Williams", StaffRole::Nurse, "Triage"),
        ("nurse-garcia", "RN Garcia", StaffRole::Nurse, "Critical Care"),
        ("nurse-brown", "RN Brown", StaffRole::Nurse, "Cardiac"),
        ("nurse-davis", "RN Davis", StaffRole::Nurse, "Emergency"),
        ("nurse-martinez", "RN Martinez", StaffRole::Nurse, "Pediatric"),
    ]
    .into_iter()
    .map(|(id, name, role, specialty)| StaffMember {
        id: id.to_string(),
        name: name.to_string(),
        role,
        specialty: specialty.to_string(),
    })
    .collect()
}

/// Roster members with the given role, in roster order.
pub fn roster_by_role(roster: &[StaffMember], role: StaffRole) -> Vec<&StaffMember> {
    roster.iter().filter(|s| s.role == role).collect()
}

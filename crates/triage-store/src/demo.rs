//! Synthetic cases for demo mode.
//!
//! Arrival and update times are relative to the moment the store starts so
//! the dashboard always shows a plausible live queue.

use jiff::{SignedDuration, Timestamp};

use triage_core::ids;
use triage_core::models::case::{CaseRecord, CaseStatus, Sex};
use triage_core::models::risk::RiskLevel;
use triage_core::models::timeline::{TimelineEvent, UserRole};
use triage_core::models::vitals::Vitals;

struct Seed {
    patient_number: u32,
    patient_name: &'static str,
    age: u32,
    sex: Sex,
    chief_complaint: &'static str,
    /// heart rate, systolic, diastolic, temperature, respiratory rate, SpO2, pain
    vitals: (i32, i32, i32, f64, i32, i32, i32),
    medical_history: &'static str,
    current_medications: &'static str,
    allergies: &'static str,
    risk_score: u8,
    ai_summary: &'static str,
    ai_confidence: f64,
    status: CaseStatus,
    assigned_to: Option<&'static str>,
    arrived_mins_ago: i64,
    /// (minutes ago, event, user, role); the first entry is the creation.
    timeline: &'static [(i64, &'static str, &'static str, UserRole)],
}

const SEEDS: &[Seed] = &[
    Seed {
        patient_number: 7821,
        patient_name: "John D.",
        age: 68,
        sex: Sex::M,
        chief_complaint: "Severe chest pain radiating to left arm, shortness of breath",
        vitals: (112, 160, 95, 98.6, 24, 92, 9),
        medical_history: "Hypertension, Type 2 Diabetes, Previous MI (2019)",
        current_medications: "Metformin, Lisinopril, Aspirin",
        allergies: "Penicillin",
        risk_score: 92,
        ai_summary: "**CRITICAL:** 68M presenting with classic acute coronary syndrome symptoms. \
            Tachycardia (112), elevated BP, reduced O2 sat (92%). \
            **Recommend:** Immediate ECG, troponin, cardiology consult.",
        ai_confidence: 0.95,
        status: CaseStatus::New,
        assigned_to: None,
        arrived_mins_ago: 15,
        timeline: &[(15, "Case created", "Nurse Martinez", UserRole::TriageNurse)],
    },
    Seed {
        patient_number: 5492,
        patient_name: "Maria G.",
        age: 34,
        sex: Sex::F,
        chief_complaint: "Severe abdominal pain, nausea, vomiting for 6 hours",
        vitals: (98, 128, 82, 101.2, 18, 97, 8),
        medical_history: "Appendectomy (2015), No chronic conditions",
        current_medications: "None",
        allergies: "None known",
        risk_score: 76,
        ai_summary: "**URGENT:** 34F with acute abdomen, fever (101.2°F), persistent vomiting. \
            **Recommend:** Surgical consult, CBC, imaging (CT/ultrasound).",
        ai_confidence: 0.88,
        status: CaseStatus::InProgress,
        assigned_to: Some("Dr. Chen"),
        arrived_mins_ago: 45,
        timeline: &[
            (45, "Case created", "Nurse Johnson", UserRole::TriageNurse),
            (10, "Assigned to Dr. Chen", "Charge Nurse", UserRole::TriageNurse),
        ],
    },
    Seed {
        patient_number: 3318,
        patient_name: "Robert K.",
        age: 52,
        sex: Sex::M,
        chief_complaint: "Fall from ladder, head injury, confusion",
        vitals: (88, 145, 90, 98.4, 16, 98, 6),
        medical_history: "Hypertension",
        current_medications: "Amlodipine",
        allergies: "None",
        risk_score: 81,
        ai_summary: "**URGENT:** 52M s/p fall with head trauma and altered mental status. \
            **Recommend:** CT head stat, neuro checks q15min, consider trauma activation.",
        ai_confidence: 0.91,
        status: CaseStatus::Escalated,
        assigned_to: Some("Trauma Team"),
        arrived_mins_ago: 30,
        timeline: &[
            (30, "Case created", "Nurse Davis", UserRole::TriageNurse),
            (5, "Escalated to trauma team", "Dr. Patel", UserRole::Doctor),
        ],
    },
    Seed {
        patient_number: 9104,
        patient_name: "Sarah L.",
        age: 29,
        sex: Sex::F,
        chief_complaint: "Suspected allergic reaction, facial swelling, difficulty swallowing",
        vitals: (105, 118, 75, 98.8, 22, 94, 4),
        medical_history: "Seasonal allergies, No prior anaphylaxis",
        current_medications: "Cetirizine PRN",
        allergies: "Shellfish (patient reports, never tested)",
        risk_score: 85,
        ai_summary: "**CRITICAL:** 29F with angioedema and dysphagia after shellfish exposure. \
            **Recommend:** Epinephrine ready, IV access, airway monitoring, consider ICU.",
        ai_confidence: 0.92,
        status: CaseStatus::New,
        assigned_to: None,
        arrived_mins_ago: 8,
        timeline: &[(8, "Case created - PRIORITY", "Nurse Rodriguez", UserRole::TriageNurse)],
    },
    Seed {
        patient_number: 6677,
        patient_name: "Michael T.",
        age: 45,
        sex: Sex::M,
        chief_complaint: "Persistent cough, fever, fatigue for 5 days",
        vitals: (92, 130, 85, 100.8, 20, 95, 3),
        medical_history: "Asthma (mild, controlled)",
        current_medications: "Albuterol inhaler PRN",
        allergies: "None",
        risk_score: 58,
        ai_summary: "**MODERATE:** 45M with prolonged respiratory symptoms and fever. \
            **Recommend:** CXR, consider antibiotics, reassess in 2-4 hours.",
        ai_confidence: 0.82,
        status: CaseStatus::New,
        assigned_to: None,
        arrived_mins_ago: 55,
        timeline: &[(55, "Case created", "Nurse Williams", UserRole::TriageNurse)],
    },
    Seed {
        patient_number: 2341,
        patient_name: "Lisa M.",
        age: 61,
        sex: Sex::F,
        chief_complaint: "Dizziness, lightheadedness when standing",
        vitals: (95, 102, 68, 97.9, 16, 98, 1),
        medical_history: "Hypertension, Osteoarthritis",
        current_medications: "Lisinopril, Ibuprofen",
        allergies: "Codeine",
        risk_score: 64,
        ai_summary: "**MODERATE:** 61F with orthostatic symptoms on an antihypertensive. \
            **Recommend:** Orthostatic vitals, medication review, IV fluids PRN.",
        ai_confidence: 0.79,
        status: CaseStatus::InProgress,
        assigned_to: Some("Dr. Anderson"),
        arrived_mins_ago: 70,
        timeline: &[
            (70, "Case created", "Nurse Thompson", UserRole::TriageNurse),
            (20, "Assigned to Dr. Anderson", "Charge Nurse", UserRole::TriageNurse),
        ],
    },
    Seed {
        patient_number: 8823,
        patient_name: "David H.",
        age: 23,
        sex: Sex::M,
        chief_complaint: "Sprained ankle during basketball, swelling and pain",
        vitals: (78, 118, 72, 98.2, 14, 99, 5),
        medical_history: "None",
        current_medications: "None",
        allergies: "None",
        risk_score: 28,
        ai_summary: "**LOW PRIORITY:** 23M with isolated ankle injury, stable vitals. \
            **Recommend:** X-ray to r/o fracture, RICE protocol.",
        ai_confidence: 0.87,
        status: CaseStatus::New,
        assigned_to: None,
        arrived_mins_ago: 90,
        timeline: &[(90, "Case created", "Nurse Lee", UserRole::TriageNurse)],
    },
    Seed {
        patient_number: 4456,
        patient_name: "Emily R.",
        age: 19,
        sex: Sex::F,
        chief_complaint: "Minor laceration on hand from broken glass",
        vitals: (82, 115, 70, 98.4, 14, 99, 4),
        medical_history: "None",
        current_medications: "None",
        allergies: "None",
        risk_score: 22,
        ai_summary: "**LOW PRIORITY:** 19F with superficial hand laceration, stable vitals. \
            **Recommend:** Wound cleaning, closure, tetanus status check.",
        ai_confidence: 0.91,
        status: CaseStatus::Completed,
        assigned_to: Some("Dr. Wilson"),
        arrived_mins_ago: 120,
        timeline: &[
            (120, "Case created", "Nurse Garcia", UserRole::TriageNurse),
            (80, "Assigned to Dr. Wilson", "Charge Nurse", UserRole::TriageNurse),
            (35, "Treatment completed, discharged", "Dr. Wilson", UserRole::Doctor),
        ],
    },
    Seed {
        patient_number: 1129,
        patient_name: "James B.",
        age: 55,
        sex: Sex::M,
        chief_complaint: "Migraine headache, photophobia, nausea",
        vitals: (76, 125, 80, 98.6, 16, 99, 7),
        medical_history: "Chronic migraines (diagnosed 2018)",
        current_medications: "Sumatriptan PRN",
        allergies: "Sulfa drugs",
        risk_score: 35,
        ai_summary: "**LOW PRIORITY:** 55M with typical migraine presentation, no red flags. \
            **Recommend:** Quiet environment, migraine protocol, neuro exam.",
        ai_confidence: 0.85,
        status: CaseStatus::InProgress,
        assigned_to: Some("Dr. Kumar"),
        arrived_mins_ago: 100,
        timeline: &[
            (100, "Case created", "Nurse Brown", UserRole::TriageNurse),
            (40, "Assigned to Dr. Kumar", "Charge Nurse", UserRole::TriageNurse),
        ],
    },
    Seed {
        patient_number: 5567,
        patient_name: "Nancy W.",
        age: 72,
        sex: Sex::F,
        chief_complaint: "UTI symptoms: burning urination, frequency, urgency",
        vitals: (84, 138, 82, 99.1, 16, 98, 4),
        medical_history: "Recurrent UTIs, Diabetes Type 2",
        current_medications: "Metformin, Glipizide",
        allergies: "Macrobid",
        risk_score: 42,
        ai_summary: "**LOW PRIORITY:** 72F with classic UTI symptoms; diabetic, monitor for \
            sepsis signs. **Recommend:** Urinalysis and culture, non-Macrobid antibiotic.",
        ai_confidence: 0.83,
        status: CaseStatus::New,
        assigned_to: None,
        arrived_mins_ago: 65,
        timeline: &[(65, "Case created", "Nurse Martinez", UserRole::TriageNurse)],
    },
];

fn minutes_before(now: Timestamp, minutes: i64) -> Timestamp {
    now - SignedDuration::from_mins(minutes)
}

/// The demo queue, as it looked `now`. Ids run `CASE-0001` to `CASE-0010`.
pub fn synthetic_cases(now: Timestamp) -> Vec<CaseRecord> {
    SEEDS
        .iter()
        .zip(1u32..)
        .map(|(seed, number)| {
            let (heart_rate, systolic, diastolic, temperature, respiratory_rate, spo2, pain) =
                seed.vitals;
            let timeline: Vec<TimelineEvent> = seed
                .timeline
                .iter()
                .map(|&(mins, event, user, role)| {
                    TimelineEvent::new(minutes_before(now, mins), event, user, role)
                })
                .collect();
            let last_updated = timeline
                .last()
                .map_or(minutes_before(now, seed.arrived_mins_ago), |e| e.timestamp);

            CaseRecord {
                id: ids::case_id(number),
                patient_id: ids::patient_id(seed.patient_number),
                patient_name: seed.patient_name.to_string(),
                age: seed.age,
                sex: seed.sex,
                chief_complaint: seed.chief_complaint.to_string(),
                vitals: Vitals {
                    heart_rate: Some(heart_rate),
                    systolic_bp: Some(systolic),
                    diastolic_bp: Some(diastolic),
                    temperature: Some(temperature),
                    respiratory_rate: Some(respiratory_rate),
                    oxygen_saturation: Some(spo2),
                    pain_level: Some(pain),
                    ..Default::default()
                },
                medical_history: seed.medical_history.to_string(),
                current_medications: seed.current_medications.to_string(),
                allergies: seed.allergies.to_string(),
                risk_score: seed.risk_score,
                risk_level: RiskLevel::from_score(seed.risk_score),
                ai_summary: seed.ai_summary.to_string(),
                ai_confidence: seed.ai_confidence,
                status: seed.status,
                assigned_to: seed.assigned_to.map(str::to_string),
                arrival_time: minutes_before(now, seed.arrived_mins_ago),
                last_updated,
                attachments: Vec::new(),
                timeline,
            }
        })
        .collect()
}

//! Static medical vocabularies.
//!
//! These tables drive context classification: a window is considered medical
//! iff at least one term from any category appears in it (case-insensitive).
//! Category order is significant — it is both the tag discovery order and
//! the tie-break order for `primary_type` (diagnoses win over procedures,
//! procedures over tests, tests over medications).

use crate::models::enums::EventType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermCategory {
    Diagnoses,
    Procedures,
    Tests,
    Medications,
    Anatomy,
}

impl TermCategory {
    /// Event type a window is classified as when this category dominates.
    /// Anatomy terms alone never decide a type; they fall back to `Test`
    /// with a generic "Medical Event" title.
    pub fn event_type(&self) -> EventType {
        match self {
            TermCategory::Diagnoses => EventType::Diagnosis,
            TermCategory::Procedures => EventType::Surgery,
            TermCategory::Tests => EventType::Test,
            TermCategory::Medications => EventType::Medication,
            TermCategory::Anatomy => EventType::Test,
        }
    }

    /// Title prefix for the templated event title.
    pub fn title_prefix(&self) -> &'static str {
        match self {
            TermCategory::Diagnoses => "Diagnosis",
            TermCategory::Procedures => "Procedure",
            TermCategory::Tests => "Test",
            TermCategory::Medications => "Medication",
            TermCategory::Anatomy => "Medical Event",
        }
    }
}

/// Categorized vocabulary, scanned in declared order.
pub const VOCABULARY: &[(TermCategory, &[&str])] = &[
    (
        TermCategory::Diagnoses,
        &[
            // Concrete conditions first: the first matched term names the
            // event, and "Diagnosis: Pneumonia" beats "Diagnosis: Diagnosis".
            "pneumonia", "diabetes", "hypertension", "anemia", "asthma",
            "arthritis", "scoliosis", "migraine", "hernia",
            "diagnosis", "diagnosed", "condition", "syndrome", "disease",
            "disorder", "abnormality", "pathology", "lesion", "mass",
            "tumor", "cancer", "carcinoma", "adenoma", "cyst",
            "inflammation", "infection", "stenosis", "occlusion",
            "fracture", "tear", "rupture", "herniation", "prolapse",
        ],
    ),
    (
        TermCategory::Procedures,
        &[
            "surgery", "procedure", "operation", "biopsy", "resection",
            "repair", "reconstruction", "transplant", "implant",
            "catheterization", "endoscopy", "laparoscopy", "arthroscopy",
        ],
    ),
    (
        TermCategory::Tests,
        &[
            "MRI", "CT", "X-ray", "ultrasound", "echocardiogram", "EKG", "ECG",
            "blood test", "lab", "laboratory", "culture", "pathology",
            "mammogram", "colonoscopy", "endoscopy", "PET scan",
        ],
    ),
    (
        TermCategory::Medications,
        &[
            "medication", "drug", "prescription", "tablet", "capsule",
            "injection", "infusion", "therapy", "treatment", "dose",
        ],
    ),
    (
        TermCategory::Anatomy,
        &[
            "heart", "lung", "liver", "kidney", "brain", "spine", "bone",
            "muscle", "nerve", "artery", "vein", "lymph", "thyroid",
            "pancreas", "stomach", "intestine", "colon", "bladder",
        ],
    ),
];

/// Markers of clearly-normal language. A candidate finding containing any of
/// these is not a dismissed finding — it is an explicitly normal one.
pub const NORMAL_MARKERS: &[&str] = &[
    "normal",
    "unremarkable",
    "within normal limits",
    "no abnormality",
    "negative",
    "clear",
];

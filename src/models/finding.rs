use serde::{Deserialize, Serialize};

use super::enums::Significance;

/// One suspected dismissed clinical observation.
///
/// `location` is a human-readable locator (a broader context snippet), not a
/// byte offset: it is meant to be shown to the patient alongside the finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentalFinding {
    pub finding: String,
    pub location: String,
    pub significance: Significance,
    pub related_symptoms: Vec<String>,
    pub suggested_questions: Vec<String>,
    pub why_it_matters: String,
    pub confidence: f32,
}

use serde::{Deserialize, Serialize};

use super::enums::{EventStatus, EventType, Severity};
use super::finding::IncidentalFinding;

/// One detected clinical occurrence, assembled from a dated context window
/// (or from the whole-document dismissed-findings pass).
///
/// Created once during a parse call and never mutated afterwards; the caller
/// owns the batch. `needs_review` is always derived from `confidence` at
/// construction, never set independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub title: String,
    /// ISO `YYYY-MM-DD` when standardization succeeded; otherwise the raw
    /// date string as it appeared in the document.
    pub date: String,
    pub end_date: Option<String>,
    pub provider: Option<String>,
    pub location: Option<String>,
    pub description: String,
    pub status: EventStatus,
    pub severity: Option<Severity>,
    pub tags: Vec<String>,
    pub confidence: f32,
    /// Which detection layers contributed to this event.
    pub sources: Vec<String>,
    pub needs_review: bool,
    pub suggestions: Vec<String>,
    pub raw_text: String,
    pub incidental_findings: Vec<IncidentalFinding>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::Significance;

    fn make_event() -> MedicalEvent {
        MedicalEvent {
            id: "parsed-00000000-0000-0000-0000-000000000000".to_string(),
            event_type: EventType::Diagnosis,
            title: "Diagnosis: Pneumonia".to_string(),
            date: "2023-04-01".to_string(),
            end_date: None,
            provider: Some("John Smith".to_string()),
            location: None,
            description: "diagnosis of pneumonia".to_string(),
            status: EventStatus::Active,
            severity: None,
            tags: vec!["diagnosis".to_string(), "pneumonia".to_string()],
            confidence: 50.0,
            sources: vec!["regex-parser".to_string()],
            needs_review: true,
            suggestions: vec![],
            raw_text: "On 2023-04-01, diagnosis of pneumonia".to_string(),
            incidental_findings: vec![IncidentalFinding {
                finding: "a small nodule in the left lower lobe".to_string(),
                location: "Context: ...a small nodule...".to_string(),
                significance: Significance::Medium,
                related_symptoms: vec!["varies based on finding".to_string()],
                suggested_questions: vec![],
                why_it_matters: "may still be relevant".to_string(),
                confidence: 0.75,
            }],
        }
    }

    #[test]
    fn serializes_with_contract_field_names() {
        let json = serde_json::to_value(make_event()).unwrap();
        let obj = json.as_object().unwrap();

        for key in [
            "id",
            "type",
            "title",
            "date",
            "end_date",
            "provider",
            "location",
            "description",
            "status",
            "severity",
            "tags",
            "confidence",
            "sources",
            "needs_review",
            "suggestions",
            "raw_text",
            "incidental_findings",
        ] {
            assert!(obj.contains_key(key), "missing contract key: {key}");
        }
        assert_eq!(obj["type"], "diagnosis");
        assert_eq!(obj["status"], "active");
        assert!(obj["severity"].is_null());
    }

    #[test]
    fn finding_serializes_contract_fields() {
        let json = serde_json::to_value(&make_event().incidental_findings[0]).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "finding",
            "location",
            "significance",
            "related_symptoms",
            "suggested_questions",
            "why_it_matters",
            "confidence",
        ] {
            assert!(obj.contains_key(key), "missing contract key: {key}");
        }
        assert_eq!(obj["significance"], "medium");
    }

    #[test]
    fn event_round_trips_through_json() {
        let event = make_event();
        let json = serde_json::to_string(&event).unwrap();
        let back: MedicalEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}

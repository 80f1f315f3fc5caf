//! Medical context classification.
//!
//! Given a context window around a located date, decides whether the window
//! describes a medical occurrence at all, what kind, and under what title.
//! Vocabulary matching is plain case-insensitive substring search over the
//! categorized term tables; provider identity is delegated to the provider
//! extractor and folded into the result.

use crate::models::enums::{EventType, Severity};

use super::dictionary::{TermCategory, VOCABULARY};
use super::provider::{extract_provider, ProviderInfo};

/// Classification bundle for one context window.
#[derive(Debug, Clone)]
pub struct ContextAnalysis {
    /// True iff at least one vocabulary term from any category matched.
    pub has_medical_content: bool,
    pub primary_type: EventType,
    pub title: String,
    /// All matched terms across all categories, in discovery order.
    /// Duplicates across categories are kept.
    pub tags: Vec<String>,
    pub provider: Option<String>,
    pub location: Option<String>,
    pub provider_info: Option<ProviderInfo>,
    pub severity: Option<Severity>,
    pub suggestions: Vec<String>,
}

/// Classify a context window. Never fails; a window without vocabulary hits
/// comes back with `has_medical_content = false` and the assembler drops it.
pub fn analyze_context(window: &str) -> ContextAnalysis {
    let lower = window.to_lowercase();

    let mut tags: Vec<String> = Vec::new();
    // First matched term per category, in category (priority) order.
    let mut category_leads: Vec<(TermCategory, &str)> = Vec::new();

    for (category, terms) in VOCABULARY {
        for term in *terms {
            if lower.contains(&term.to_lowercase()) {
                tags.push((*term).to_string());
                if !category_leads.iter().any(|(c, _)| c == category) {
                    category_leads.push((*category, *term));
                }
            }
        }
    }

    let provider_info = extract_provider(window);
    let provider = provider_info.as_ref().map(|p| p.name.clone());
    let location = provider_info.as_ref().and_then(|p| p.organization.clone());

    if tags.is_empty() {
        return ContextAnalysis {
            has_medical_content: false,
            primary_type: EventType::Test,
            title: "Medical Event".to_string(),
            tags,
            provider,
            location,
            provider_info,
            severity: None,
            suggestions: Vec::new(),
        };
    }

    // Priority: diagnosis > procedure > test > medication. Anatomy-only
    // windows keep the default type with a generic title.
    let lead = category_leads
        .iter()
        .find(|(c, _)| *c != TermCategory::Anatomy);

    let (primary_type, title) = match lead {
        Some((category, term)) => (
            category.event_type(),
            format!("{}: {}", category.title_prefix(), title_case(term)),
        ),
        None => (
            EventType::Test,
            format!("Medical Event: {}", title_case(&tags[0])),
        ),
    };

    ContextAnalysis {
        has_medical_content: true,
        primary_type,
        title,
        tags,
        provider,
        location,
        provider_info,
        severity: None,
        suggestions: Vec::new(),
    }
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest
/// ("blood test" -> "Blood Test", "X-ray" -> "X-Ray", "MRI" -> "Mri").
pub fn title_case(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    let mut in_word = false;
    for ch in term.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_without_vocabulary_is_not_medical() {
        let analysis = analyze_context("The quick brown fox jumps over the lazy dog.");
        assert!(!analysis.has_medical_content);
        assert!(analysis.tags.is_empty());
    }

    #[test]
    fn diagnosis_term_wins_classification() {
        let analysis = analyze_context("On 2023-04-01, diagnosis of pneumonia was confirmed.");
        assert!(analysis.has_medical_content);
        assert_eq!(analysis.primary_type, EventType::Diagnosis);
        assert_eq!(analysis.title, "Diagnosis: Pneumonia");
        assert!(analysis.tags.iter().any(|t| t == "pneumonia"));
        assert!(analysis.tags.iter().any(|t| t == "diagnosis"));
    }

    #[test]
    fn diagnosis_beats_procedure_and_test() {
        let analysis =
            analyze_context("MRI showed a lesion; biopsy surgery scheduled after the diagnosis.");
        assert_eq!(analysis.primary_type, EventType::Diagnosis);
        assert!(analysis.title.starts_with("Diagnosis:"));
    }

    #[test]
    fn procedure_window_classified_as_surgery() {
        let analysis = analyze_context("Underwent arthroscopy repair without complication.");
        assert_eq!(analysis.primary_type, EventType::Surgery);
        assert!(analysis.title.starts_with("Procedure:"));
    }

    #[test]
    fn test_window_classified_as_test() {
        let analysis = analyze_context("Routine ultrasound ordered for next month.");
        assert_eq!(analysis.primary_type, EventType::Test);
        assert_eq!(analysis.title, "Test: Ultrasound");
    }

    #[test]
    fn medication_window_classified_as_medication() {
        let analysis = analyze_context("Started a new tablet twice daily.");
        assert_eq!(analysis.primary_type, EventType::Medication);
        assert!(analysis.title.starts_with("Medication:"));
    }

    #[test]
    fn anatomy_only_window_gets_generic_title() {
        let analysis = analyze_context("The liver appears enlarged on review.");
        assert!(analysis.has_medical_content);
        assert_eq!(analysis.primary_type, EventType::Test);
        assert_eq!(analysis.title, "Medical Event: Liver");
    }

    #[test]
    fn tags_preserve_discovery_order() {
        let analysis = analyze_context("Diagnosis confirmed after surgery on the heart.");
        let diagnosis_pos = analysis.tags.iter().position(|t| t == "diagnosis").unwrap();
        let surgery_pos = analysis.tags.iter().position(|t| t == "surgery").unwrap();
        let heart_pos = analysis.tags.iter().position(|t| t == "heart").unwrap();
        assert!(diagnosis_pos < surgery_pos);
        assert!(surgery_pos < heart_pos);
    }

    #[test]
    fn provider_fields_populated_from_extractor() {
        let analysis = analyze_context(
            "Diagnosis of hypertension by Dr. Maria Santos at Lakeside Clinic.",
        );
        assert_eq!(analysis.provider.as_deref(), Some("Maria Santos"));
        assert_eq!(analysis.location.as_deref(), Some("Lakeside Clinic"));
        assert!(analysis.provider_info.is_some());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let analysis = analyze_context("DIAGNOSIS OF PNEUMONIA");
        assert!(analysis.has_medical_content);
        assert_eq!(analysis.primary_type, EventType::Diagnosis);
    }

    #[test]
    fn title_case_examples() {
        assert_eq!(title_case("pneumonia"), "Pneumonia");
        assert_eq!(title_case("blood test"), "Blood Test");
        assert_eq!(title_case("X-ray"), "X-Ray");
        assert_eq!(title_case("MRI"), "Mri");
    }
}

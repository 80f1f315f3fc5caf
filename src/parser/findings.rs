//! Dismissive-language detection.
//!
//! Hunts for findings that a report mentions but frames as unimportant.
//! The patterns target linguistic constructs ("appears to be benign",
//! "stable", "incidental"), not specific diseases, so novel conditions are
//! still caught. Candidates that read as explicitly normal are filtered out;
//! everything else is emitted. Duplicates across pattern categories are kept
//! on purpose — recall beats precision here, a possible dismissed finding is
//! never silently hidden. Callers who want one entry per phrase can run
//! `dedup_findings` afterwards.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::FindingPolicy;
use crate::models::IncidentalFinding;

use super::dictionary::NORMAL_MARKERS;
use super::types::{Diagnostic, DiscardReason};
use super::window::snap_to_char_boundary;

/// A compiled dismissive-language pattern with its finding metadata.
struct DismissalPattern {
    id: &'static str,
    regex: Regex,
    /// Capture group holding the finding phrase; falls back to the full
    /// match when the group is absent or empty.
    capture_group: usize,
    category: &'static str,
}

/// Dismissive-language patterns, iterated in declared order. Order is part
/// of the contract: candidates are emitted pattern-first, match-second.
static DISMISSAL_PATTERNS: LazyLock<Vec<DismissalPattern>> = LazyLock::new(|| {
    vec![
        // "X appears to be benign/stable" — X is the buried finding
        DismissalPattern {
            id: "dismissed_qualifier",
            regex: Regex::new(r"(?is)([^.]{15,150}?)(?:\s+(?:appears to be|likely|probably|presumably|most likely|consistent with)\s+(?:benign|stable|unchanged|incidental|normal variant|of no (?:clinical )?significance))").unwrap(),
            capture_group: 1,
            category: "Potentially Dismissed Finding",
        },
        // "stable from before" often hides significant findings
        DismissalPattern {
            id: "stable_reference",
            regex: Regex::new(r"(?is)([^.]{15,150}?)(?:\s+(?:stable|unchanged|similar to (?:prior|before|previous)|no change))").unwrap(),
            capture_group: 1,
            category: "Stable Finding (May Be Significant)",
        },
        DismissalPattern {
            id: "incidental_note",
            regex: Regex::new(r"(?is)(?:incidental|incidentally noted|as an incidental finding)[^.]*?([^.]{15,100})").unwrap(),
            capture_group: 1,
            category: "Incidental Finding",
        },
        // "small" does not mean unimportant
        DismissalPattern {
            id: "size_dismissal",
            regex: Regex::new(r"(?is)([^.]{15,150}?)(?:\s+(?:small|tiny|minimal|mild|slight)[^.]*?(?:significance|concern|clinical relevance))").unwrap(),
            capture_group: 1,
            category: "Size-Dismissed Finding",
        },
        // "no evidence of X but Y" — the Y is often important
        DismissalPattern {
            id: "no_evidence_but",
            regex: Regex::new(r"(?is)no evidence of[^.]*?(?:but|however|although|note that|there is)[^.]*?([^.]{15,100})").unwrap(),
            capture_group: 1,
            category: "Finding Despite \"No Evidence\"",
        },
        // Anatomical "variants" are often clinically relevant
        DismissalPattern {
            id: "variant_label",
            regex: Regex::new(r#"(?is)([^.]{15,150}?)(?:\s+(?:variant|appears benign|of no clinical significance|developmental))"#).unwrap(),
            capture_group: 1,
            category: "Anatomical \"Variant\"",
        },
        DismissalPattern {
            id: "qualified_finding",
            regex: Regex::new(r"(?is)([^.]{15,150}?)(?:\s+(?:which|that)\s+(?:appears|seems|looks|is likely)\s+(?:benign|stable|insignificant))").unwrap(),
            capture_group: 1,
            category: "Qualified Finding",
        },
        // Anatomical abnormality stated and then never discussed
        DismissalPattern {
            id: "undiscussed_anatomical",
            regex: Regex::new(r"(?is)(?:There is|Present is|Noted is|Identified is|Seen is)\s+([^.]*?(?:nonunion|malformation|anomaly|defect|absence|agenesis|dysplasia|hypoplasia|aplasia|cleft|bifida|fusion|synostosis)(?:[^.]{0,50}?))").unwrap(),
            capture_group: 1,
            category: "Undiscussed Anatomical Finding",
        },
        // Congenital findings are routinely waved off as "normal variants"
        DismissalPattern {
            id: "congenital_finding",
            regex: Regex::new(r"(?is)((?:congenital|developmental|anatomical)[^.]*?(?:nonunion|malformation|anomaly|defect|absence|variant|difference)(?:[^.]{0,50}?))").unwrap(),
            capture_group: 1,
            category: "Congenital Finding",
        },
    ]
});

const WHY_IT_MATTERS: &str = "This finding was mentioned in your report but may have been \
dismissed as 'incidental' or 'stable'. However, many findings labeled this way can actually \
be clinically relevant, especially if you have unexplained symptoms.";

/// Scan a span of text (a context window or a whole document) for dismissed
/// findings. Discarded candidates are reported through `diagnostics`.
pub fn detect_findings(
    text: &str,
    policy: &FindingPolicy,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<IncidentalFinding> {
    let mut findings = Vec::new();

    for pattern in DISMISSAL_PATTERNS.iter() {
        for caps in pattern.regex.captures_iter(text) {
            let full = caps.get(0).expect("group 0 always present");
            let phrase = match caps.get(pattern.capture_group) {
                Some(group) if !group.as_str().is_empty() => group.as_str(),
                _ => full.as_str(),
            };
            let phrase = phrase.trim();

            if let Some(reason) = discard_reason(phrase, policy) {
                diagnostics.push(Diagnostic::FindingDiscarded {
                    candidate: phrase.to_string(),
                    pattern: pattern.id.to_string(),
                    reason,
                });
                continue;
            }

            tracing::debug!(
                pattern = pattern.id,
                category = pattern.category,
                finding = %phrase,
                "dismissed finding detected"
            );

            findings.push(IncidentalFinding {
                finding: phrase.to_string(),
                location: evidence_locator(text, full.start(), full.end(), policy),
                significance: policy.significance,
                related_symptoms: vec!["varies based on finding".to_string()],
                suggested_questions: suggested_questions(phrase),
                why_it_matters: WHY_IT_MATTERS.to_string(),
                confidence: policy.confidence,
            });
        }
    }

    findings
}

/// Optional post-filter: keep the first occurrence of each finding phrase.
/// Not applied by default — duplicate retention across categories is
/// deliberate.
pub fn dedup_findings(findings: Vec<IncidentalFinding>) -> Vec<IncidentalFinding> {
    let mut seen = HashSet::new();
    findings
        .into_iter()
        .filter(|f| seen.insert(f.finding.clone()))
        .collect()
}

/// Filter rules for an extracted phrase; `None` means it is emitted.
fn discard_reason(phrase: &str, policy: &FindingPolicy) -> Option<DiscardReason> {
    if phrase.chars().count() < policy.min_phrase_chars {
        return Some(DiscardReason::TooShort);
    }
    let lower = phrase.to_lowercase();
    if NORMAL_MARKERS.iter().any(|marker| lower.contains(marker)) {
        return Some(DiscardReason::NormalMarker);
    }
    if lower.matches("normal").count() > 1 {
        return Some(DiscardReason::RepeatedNormal);
    }
    None
}

/// Human-readable locator: a snippet of the wider evidence window around
/// the match, not a byte offset.
fn evidence_locator(text: &str, start: usize, end: usize, policy: &FindingPolicy) -> String {
    let from = snap_to_char_boundary(text, start.saturating_sub(policy.evidence_radius));
    let to = snap_to_char_boundary(text, end.saturating_add(policy.evidence_radius));
    let broader = text[from..to].trim();
    format!("Context: ...{}...", truncate_chars(broader, 100))
}

fn suggested_questions(phrase: &str) -> Vec<String> {
    vec![
        format!("What exactly is this finding: '{phrase}'?"),
        "Could this finding be related to my symptoms?".to_string(),
        "Should this finding be monitored or treated?".to_string(),
        "Why was this finding considered not significant?".to_string(),
        "Are there any specialists I should see about this?".to_string(),
    ]
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

//! Event assembly — the parse pipeline entry point.
//!
//! Two passes run on every invocation: a per-date pass that classifies the
//! context window around each located date, and a whole-document pass that
//! hunts for dismissed findings across the full text and appends one
//! synthetic event when anything turns up. The pipeline never fails for bad
//! document text; windows that produce nothing become diagnostics.

use uuid::Uuid;

use crate::config::ParserTuning;
use crate::models::enums::{EventStatus, EventType, Severity};
use crate::models::MedicalEvent;

use super::analyzer::analyze_context;
use super::confidence::score_event;
use super::dates::{locate_dates, standardize_date, LocatedDate};
use super::error::ParserError;
use super::findings::detect_findings;
use super::types::{Diagnostic, ParseOutcome};
use super::window::context_window;

/// Detection layers contributing to every per-date event.
const PER_DATE_SOURCES: [&str; 3] = ["regex-parser", "medical-dictionary", "context-analyzer"];

/// Multi-layer medical document parser.
///
/// Stateless apart from its tuning; the pattern tables are process-wide
/// statics, so one parser (or many) can be shared across threads freely.
pub struct MedicalDocumentParser {
    tuning: ParserTuning,
}

impl Default for MedicalDocumentParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MedicalDocumentParser {
    pub fn new() -> Self {
        Self {
            tuning: ParserTuning::default(),
        }
    }

    /// Build a parser with custom tuning. Fails fast on values the pipeline
    /// cannot operate with — the only error path this component has.
    pub fn with_tuning(tuning: ParserTuning) -> Result<Self, ParserError> {
        tuning.validate()?;
        Ok(Self { tuning })
    }

    /// Parse already-extracted document text into dated medical events.
    ///
    /// `filename` is used for logging only. The returned events are owned by
    /// the caller; diagnostics record everything that was skipped and why.
    pub fn parse(&self, text: &str, filename: &str) -> ParseOutcome {
        let mut events = Vec::new();
        let mut diagnostics = Vec::new();

        if text.trim().is_empty() {
            diagnostics.push(Diagnostic::EmptyInput);
            return ParseOutcome {
                events,
                diagnostics,
            };
        }

        let dates = locate_dates(text);
        tracing::debug!(file = filename, dates = dates.len(), "located dates");

        for date in &dates {
            if let Some(event) = self.analyze_date(text, date, &mut diagnostics) {
                events.push(event);
            }
        }

        // Whole-document pass: dismissed findings anywhere in the text get
        // their own synthetic event, kept separate from the per-date pools.
        let global_findings =
            detect_findings(text, &self.tuning.finding_policy, &mut diagnostics);
        if !global_findings.is_empty() {
            events.push(self.dismissed_findings_event(text, global_findings));
        }

        tracing::info!(
            file = filename,
            events = events.len(),
            diagnostics = diagnostics.len(),
            "parse complete"
        );

        ParseOutcome {
            events,
            diagnostics,
        }
    }

    /// One per-date analysis. Returns `None` (with a diagnostic) when the
    /// window around the date has no medical content.
    fn analyze_date(
        &self,
        text: &str,
        date: &LocatedDate,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Option<MedicalEvent> {
        let window = context_window(text, date.offset, self.tuning.context_radius);

        let analysis = analyze_context(window);
        if !analysis.has_medical_content {
            diagnostics.push(Diagnostic::NoMedicalContent {
                date: date.text.clone(),
                offset: date.offset,
            });
            return None;
        }

        let findings = detect_findings(window, &self.tuning.finding_policy, diagnostics);
        let confidence = score_event(analysis.tags.len(), findings.len(), analysis.primary_type);

        let date_iso = match standardize_date(&date.text) {
            Some(iso) => iso,
            None => {
                diagnostics.push(Diagnostic::DateNotStandardized {
                    raw: date.text.clone(),
                });
                date.text.clone()
            }
        };

        Some(MedicalEvent {
            id: format!("parsed-{}", Uuid::new_v4()),
            event_type: analysis.primary_type,
            title: analysis.title,
            date: date_iso,
            end_date: None,
            provider: analysis.provider,
            location: analysis.location,
            description: window.trim().to_string(),
            status: EventStatus::Active,
            severity: analysis.severity,
            tags: analysis.tags,
            confidence,
            sources: PER_DATE_SOURCES.iter().map(|s| s.to_string()).collect(),
            needs_review: confidence < self.tuning.review_threshold,
            suggestions: analysis.suggestions,
            raw_text: window.to_string(),
            incidental_findings: findings,
        })
    }

    fn dismissed_findings_event(
        &self,
        text: &str,
        findings: Vec<crate::models::IncidentalFinding>,
    ) -> MedicalEvent {
        let confidence = 90.0;
        MedicalEvent {
            id: format!("dismissed-findings-{}", Uuid::new_v4()),
            event_type: EventType::DismissedFindings,
            title: "Potentially Dismissed Findings".to_string(),
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            end_date: None,
            provider: Some("Document Analysis".to_string()),
            location: Some("Full Document Scan".to_string()),
            description: format!(
                "Found {} potentially dismissed findings that may need attention.",
                findings.len()
            ),
            status: EventStatus::NeedsReview,
            severity: Some(Severity::Moderate),
            tags: vec![
                "dismissed".to_string(),
                "incidental".to_string(),
                "review_needed".to_string(),
            ],
            confidence,
            sources: vec!["dismissed-finding-detector".to_string()],
            needs_review: confidence < self.tuning.review_threshold,
            suggestions: vec![
                "Review these findings with your healthcare provider".to_string(),
                "Ask specifically about each dismissed finding".to_string(),
                "Request follow-up if symptoms match".to_string(),
            ],
            raw_text: capped_raw_text(text, self.tuning.raw_text_cap),
            incidental_findings: findings,
        }
    }
}

/// First `cap` chars of the document, with an ellipsis marker when cut.
fn capped_raw_text(text: &str, cap: usize) -> String {
    match text.char_indices().nth(cap) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

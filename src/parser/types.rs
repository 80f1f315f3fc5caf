use serde::Serialize;

use crate::models::MedicalEvent;

/// Result of one parse call: the assembled events plus a record of
/// everything that was skipped or degraded along the way.
///
/// Skips are never fatal and never logged-and-lost; the diagnostics channel
/// makes them available to callers and tests.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParseOutcome {
    pub events: Vec<MedicalEvent>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Why a finding candidate was dropped before emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscardReason {
    /// Extracted phrase was below the minimum length.
    TooShort,
    /// Phrase contained a clearly-normal marker.
    NormalMarker,
    /// Phrase mentioned "normal" more than once.
    RepeatedNormal,
}

/// One skipped or degraded step during parsing. Never fatal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Input was empty or whitespace-only; nothing to parse.
    EmptyInput,
    /// A dated window contained no vocabulary term from any category,
    /// so no event was created for it.
    NoMedicalContent { date: String, offset: usize },
    /// A date string did not standardize to ISO; the event keeps the raw
    /// spelling.
    DateNotStandardized { raw: String },
    /// A dismissive-language match was filtered out before emission.
    FindingDiscarded {
        candidate: String,
        pattern: String,
        reason: DiscardReason,
    },
}

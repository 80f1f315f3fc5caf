use crate::models::enums::Significance;
use crate::parser::ParserError;

/// Application-level constants
pub const APP_NAME: &str = "chartsift";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter for the CLI binary
pub fn default_log_filter() -> String {
    format!("{APP_NAME}=info")
}

/// Policy for emitted incidental findings.
///
/// Flat values applied to every emitted finding; kept as configuration so
/// finer-grained significance scoring can replace them without an API break.
#[derive(Debug, Clone)]
pub struct FindingPolicy {
    /// Significance assigned to every pattern-matched finding.
    pub significance: Significance,
    /// Confidence assigned to every pattern-matched finding, in [0, 1].
    pub confidence: f32,
    /// Extracted phrases shorter than this (in chars) are discarded.
    pub min_phrase_chars: usize,
    /// Radius of the evidence snippet captured around each match, in chars.
    pub evidence_radius: usize,
}

impl Default for FindingPolicy {
    fn default() -> Self {
        Self {
            significance: Significance::Medium,
            confidence: 0.75,
            min_phrase_chars: 15,
            evidence_radius: 200,
        }
    }
}

/// Tuning knobs for the document parser. Defaults match the shipped behavior;
/// `validate` rejects values the pipeline cannot operate with.
#[derive(Debug, Clone)]
pub struct ParserTuning {
    /// Chars of context taken on each side of a located date.
    pub context_radius: usize,
    /// Events scoring below this are flagged `needs_review`, in [0, 100].
    pub review_threshold: f32,
    /// Max chars of document text kept as `raw_text` on the
    /// whole-document dismissed-findings event.
    pub raw_text_cap: usize,
    pub finding_policy: FindingPolicy,
}

impl Default for ParserTuning {
    fn default() -> Self {
        Self {
            context_radius: 500,
            review_threshold: 80.0,
            raw_text_cap: 1000,
            finding_policy: FindingPolicy::default(),
        }
    }
}

impl ParserTuning {
    pub fn validate(&self) -> Result<(), ParserError> {
        if self.context_radius == 0 {
            return Err(ParserError::Config(
                "context_radius must be at least 1".into(),
            ));
        }
        if !(0.0..=100.0).contains(&self.review_threshold) {
            return Err(ParserError::Config(format!(
                "review_threshold must be within [0, 100], got {}",
                self.review_threshold
            )));
        }
        if self.raw_text_cap == 0 {
            return Err(ParserError::Config("raw_text_cap must be at least 1".into()));
        }
        if self.finding_policy.min_phrase_chars == 0 {
            return Err(ParserError::Config(
                "min_phrase_chars must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.finding_policy.confidence) {
            return Err(ParserError::Config(format!(
                "finding confidence must be within [0, 1], got {}",
                self.finding_policy.confidence
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tuning_is_valid() {
        assert!(ParserTuning::default().validate().is_ok());
    }

    #[test]
    fn default_tuning_matches_shipped_constants() {
        let tuning = ParserTuning::default();
        assert_eq!(tuning.context_radius, 500);
        assert_eq!(tuning.review_threshold, 80.0);
        assert_eq!(tuning.raw_text_cap, 1000);
        assert_eq!(tuning.finding_policy.min_phrase_chars, 15);
        assert_eq!(tuning.finding_policy.evidence_radius, 200);
        assert_eq!(tuning.finding_policy.confidence, 0.75);
        assert_eq!(tuning.finding_policy.significance, Significance::Medium);
    }

    #[test]
    fn zero_radius_rejected() {
        let tuning = ParserTuning {
            context_radius: 0,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(ParserError::Config(_))));
    }

    #[test]
    fn out_of_range_review_threshold_rejected() {
        let tuning = ParserTuning {
            review_threshold: 120.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn out_of_range_finding_confidence_rejected() {
        let mut tuning = ParserTuning::default();
        tuning.finding_policy.confidence = 1.5;
        assert!(tuning.validate().is_err());
    }
}

//! Event-level confidence scoring.
//!
//! Pure function of the classification outcome: more vocabulary hits and
//! more incidental findings mean a better-supported event. Deterministic by
//! construction — identical inputs always score identically.

use crate::models::enums::EventType;

/// Points per matched vocabulary tag.
const TAG_WEIGHT: f32 = 15.0;
/// Points per detected incidental finding.
const FINDING_WEIGHT: f32 = 25.0;
/// Flat bonus for the more specific event types.
const SPECIFIC_TYPE_BONUS: f32 = 20.0;

/// Score an assembled event. Result is clamped to [0, 100].
pub fn score_event(tag_count: usize, finding_count: usize, primary_type: EventType) -> f32 {
    let mut confidence = tag_count as f32 * TAG_WEIGHT + finding_count as f32 * FINDING_WEIGHT;

    if matches!(primary_type, EventType::Diagnosis | EventType::Surgery) {
        confidence += SPECIFIC_TYPE_BONUS;
    }

    confidence.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_as_documented() {
        assert_eq!(score_event(1, 0, EventType::Test), 15.0);
        assert_eq!(score_event(0, 1, EventType::Test), 25.0);
        assert_eq!(score_event(2, 1, EventType::Test), 55.0);
    }

    #[test]
    fn diagnosis_and_surgery_get_type_bonus() {
        assert_eq!(score_event(1, 0, EventType::Diagnosis), 35.0);
        assert_eq!(score_event(1, 0, EventType::Surgery), 35.0);
        assert_eq!(score_event(1, 0, EventType::Test), 15.0);
        assert_eq!(score_event(1, 0, EventType::Medication), 15.0);
    }

    #[test]
    fn capped_at_one_hundred() {
        assert_eq!(score_event(50, 50, EventType::Diagnosis), 100.0);
    }

    #[test]
    fn zero_inputs_score_zero() {
        assert_eq!(score_event(0, 0, EventType::Test), 0.0);
    }

    #[test]
    fn monotonic_in_tags_and_findings() {
        for tags in 0..12 {
            for findings in 0..12 {
                let base = score_event(tags, findings, EventType::Test);
                assert!(score_event(tags + 1, findings, EventType::Test) >= base);
                assert!(score_event(tags, findings + 1, EventType::Test) >= base);
                assert!((0.0..=100.0).contains(&base));
            }
        }
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        for _ in 0..3 {
            assert_eq!(
                score_event(3, 2, EventType::Diagnosis),
                score_event(3, 2, EventType::Diagnosis)
            );
        }
    }
}

use crate::parser::ParserError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParserError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ParserError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(EventType {
    Diagnosis => "diagnosis",
    Surgery => "surgery",
    Test => "test",
    Medication => "medication",
    DismissedFindings => "dismissed_findings",
});

str_enum!(EventStatus {
    Active => "active",
    Resolved => "resolved",
    Ongoing => "ongoing",
    Scheduled => "scheduled",
    NeedsReview => "needs_review",
});

str_enum!(Severity {
    Mild => "mild",
    Moderate => "moderate",
    Severe => "severe",
    Critical => "critical",
});

str_enum!(Significance {
    Low => "low",
    Medium => "medium",
    High => "high",
    Critical => "critical",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn event_type_round_trip() {
        for (variant, s) in [
            (EventType::Diagnosis, "diagnosis"),
            (EventType::Surgery, "surgery"),
            (EventType::Test, "test"),
            (EventType::Medication, "medication"),
            (EventType::DismissedFindings, "dismissed_findings"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(EventType::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn event_status_round_trip() {
        for (variant, s) in [
            (EventStatus::Active, "active"),
            (EventStatus::Resolved, "resolved"),
            (EventStatus::Ongoing, "ongoing"),
            (EventStatus::Scheduled, "scheduled"),
            (EventStatus::NeedsReview, "needs_review"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(EventStatus::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn serde_uses_snake_case_values() {
        assert_eq!(
            serde_json::to_string(&EventType::DismissedFindings).unwrap(),
            "\"dismissed_findings\""
        );
        assert_eq!(
            serde_json::to_string(&EventStatus::NeedsReview).unwrap(),
            "\"needs_review\""
        );
        assert_eq!(
            serde_json::to_string(&Significance::Medium).unwrap(),
            "\"medium\""
        );
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(EventType::from_str("invalid").is_err());
        assert!(Severity::from_str("unknown").is_err());
        assert!(Significance::from_str("").is_err());
    }
}

//! Heuristic provider-identity resolution.
//!
//! Tries a fixed priority list of clinician name shapes; the first pattern
//! producing a plausible match wins and no further name patterns are tried.
//! Organization, phone, address and specialty are extracted independently
//! and each raises the provider-level confidence score (which is unrelated
//! to the event-level confidence from the scorer).
//!
//! Name patterns are deliberately case-sensitive: the lastname-first shape
//! relies on the all-caps surname convention of dictated radiology reports
//! ("SMITH, MD, John A.") to avoid swallowing ordinary prose.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// How a name pattern's capture groups map onto a display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameShape {
    /// Group 1 is the full name as written.
    Single,
    /// Group 1 is the surname, group 2 the given name ("First Last").
    LastnameFirst,
}

struct NamePattern {
    id: &'static str,
    regex: Regex,
    shape: NameShape,
}

/// Clinician name shapes, in priority order. First plausible match wins.
static NAME_PATTERNS: LazyLock<Vec<NamePattern>> = LazyLock::new(|| {
    vec![
        NamePattern {
            id: "credentials_suffix",
            regex: Regex::new(r"(?:Dr\.?\s+)?([A-Z][a-z]+(?:\s+[A-Z][a-z]*)*),?\s*(?:MD|DO|NP|PA|FNP-C|RN|DDS|DMD|OD|PharmD|PhD|APRN|CNP|CRNP)").unwrap(),
            shape: NameShape::Single,
        },
        NamePattern {
            id: "lastname_first",
            regex: Regex::new(r"([A-Z]+),\s*(?:MD|DO|NP|PA|FNP-C|RN|DDS|DMD|OD|PharmD|PhD|APRN|CNP|CRNP),?\s*([A-Z][a-z]*(?:\s+[A-Z]\.?)*)").unwrap(),
            shape: NameShape::LastnameFirst,
        },
        NamePattern {
            id: "doctor_title",
            regex: Regex::new(r"Dr\.?\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]*)*)").unwrap(),
            shape: NameShape::Single,
        },
        NamePattern {
            id: "contextual_cue",
            regex: Regex::new(r"(?:seen by|evaluated by|treated by|under care of|provider|physician|doctor)\s+(?:Dr\.?\s+)?([A-Z][a-z]+(?:\s+[A-Z][a-z]*)*)").unwrap(),
            shape: NameShape::Single,
        },
        NamePattern {
            id: "dictated_by",
            regex: Regex::new(r"(?:Dictated by|Signed by):\s*([A-Z]+),?\s*(?:MD|DO|NP|PA|FNP-C|RN|DDS|DMD|OD|PharmD|PhD|APRN|CNP|CRNP),?\s*([A-Z][a-z]*(?:\s+[A-Z]\.?)*)").unwrap(),
            shape: NameShape::LastnameFirst,
        },
    ]
});

/// Text following at/from ending in an institutional-suffix word.
static ORGANIZATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:at|from)\s+([A-Z][a-zA-Z\s&]+(?:Hospital|Medical Center|Clinic|Health|Healthcare|Associates|Group))").unwrap()
});

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:phone|tel|call|contact).*?(\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4})")
        .unwrap()
});

static ADDRESS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+\s+[A-Za-z\s]+(?:Street|St|Avenue|Ave|Road|Rd|Drive|Dr|Boulevard|Blvd|Lane|Ln).*?(?:\d{5}|\w{2}\s+\d{5}))").unwrap()
});

/// Keyword-to-specialty table, scanned in order; first hit wins.
const SPECIALTY_TABLE: &[(&str, &[&str])] = &[
    ("Cardiology", &["heart", "cardiac", "cardio", "ecg", "ekg", "echo"]),
    ("Orthopedics", &["bone", "joint", "spine", "fracture", "orthopedic"]),
    ("Neurology", &["brain", "neuro", "seizure", "headache", "migraine"]),
    ("Radiology", &["x-ray", "ct", "mri", "scan", "imaging", "radiologist"]),
    ("Emergency", &["emergency", "er", "urgent", "trauma"]),
    ("Primary Care", &["primary", "family", "general", "annual", "checkup"]),
];

/// Confidence increments per resolved field.
const NAME_WEIGHT: u32 = 30;
const ORGANIZATION_WEIGHT: u32 = 20;
const PHONE_WEIGHT: u32 = 15;
const ADDRESS_WEIGHT: u32 = 10;
const SPECIALTY_WEIGHT: u32 = 10;

/// Resolved provider identity. Only produced when a name was found;
/// organization/phone/address alone are not enough.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderInfo {
    pub name: String,
    pub specialty: Option<String>,
    pub organization: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// Field-resolution score, NOT the event-level confidence.
    pub confidence: u32,
}

/// Attempt to resolve a clinician identity from a context window.
pub fn extract_provider(context: &str) -> Option<ProviderInfo> {
    let name = resolve_name(context)?;

    let mut confidence = NAME_WEIGHT;

    let organization = ORGANIZATION_PATTERN
        .captures(context)
        .map(|c| c[1].trim().to_string());
    if organization.is_some() {
        confidence += ORGANIZATION_WEIGHT;
    }

    let phone = PHONE_PATTERN
        .captures(context)
        .map(|c| c[1].trim().to_string());
    if phone.is_some() {
        confidence += PHONE_WEIGHT;
    }

    let address = ADDRESS_PATTERN
        .captures(context)
        .map(|c| c[1].trim().to_string());
    if address.is_some() {
        confidence += ADDRESS_WEIGHT;
    }

    let specialty = guess_specialty(context);
    if specialty.is_some() {
        confidence += SPECIALTY_WEIGHT;
    }

    Some(ProviderInfo {
        name,
        specialty,
        organization,
        phone,
        address,
        confidence,
    })
}

/// First name pattern yielding a cleaned match longer than 2 chars wins.
fn resolve_name(context: &str) -> Option<String> {
    for pattern in NAME_PATTERNS.iter() {
        let Some(caps) = pattern.regex.captures(context) else {
            continue;
        };
        let candidate = match pattern.shape {
            NameShape::Single => caps[1].to_string(),
            NameShape::LastnameFirst => format!("{} {}", caps[2].trim(), caps[1].trim()),
        };
        let cleaned = candidate.replace(',', "").trim().to_string();
        if cleaned.chars().count() > 2 {
            tracing::debug!(pattern = pattern.id, name = %cleaned, "provider name resolved");
            return Some(cleaned);
        }
    }
    None
}

fn guess_specialty(context: &str) -> Option<String> {
    let lower = context.to_lowercase();
    for (specialty, keywords) in SPECIALTY_TABLE {
        if keywords.iter().any(|k| lower.contains(k)) {
            return Some((*specialty).to_string());
        }
    }
    None
}

//! Date location and standardization.
//!
//! The locator scans raw text for date-like substrings across several
//! formats and reports each with its byte offset. Overlapping matches from
//! different patterns are all retained; downstream each match is analyzed
//! independently. Standardization to ISO is best-effort — a date that does
//! not parse keeps its original spelling.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// A date-like substring and the byte offset where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedDate {
    pub text: String,
    pub offset: usize,
}

static DATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // MM/DD/YYYY
        Regex::new(r"\b\d{1,2}/\d{1,2}/\d{4}\b").unwrap(),
        // YYYY-MM-DD
        Regex::new(r"\b\d{4}-\d{2}-\d{2}\b").unwrap(),
        // Month D, YYYY
        Regex::new(r"(?i)\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},?\s+\d{4}\b").unwrap(),
        // D Mon YYYY
        Regex::new(r"(?i)\b\d{1,2}\s+(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s+\d{4}\b").unwrap(),
    ]
});

/// Find every date-like substring, ordered by position in the document.
/// The same substring may appear once per pattern that recognizes it; the
/// sort is stable, so equal offsets keep pattern-table order.
pub fn locate_dates(text: &str) -> Vec<LocatedDate> {
    let mut dates = Vec::new();
    for pattern in DATE_PATTERNS.iter() {
        for mat in pattern.find_iter(text) {
            dates.push(LocatedDate {
                text: mat.as_str().to_string(),
                offset: mat.start(),
            });
        }
    }
    dates.sort_by_key(|d| d.offset);
    dates
}

/// Formats tried when standardizing, in locator-pattern order.
const PARSE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d", "%B %d, %Y", "%B %d %Y", "%d %b %Y"];

/// Convert a located date string to ISO `YYYY-MM-DD`.
/// Returns `None` when no format parses (e.g. 13/45/2023); the caller
/// retains the original string in that case.
pub fn standardize_date(raw: &str) -> Option<String> {
    for format in PARSE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date.format("%Y-%m-%d").to_string());
        }
    }
    None
}

//! chartsift — reconstructs dated medical events from extracted document
//! text and flags findings that were linguistically dismissed.
//!
//! Input is an opaque text string (OCR / PDF extraction and cleanup happen
//! upstream); output is an ordered list of [`models::MedicalEvent`] plus
//! diagnostics describing everything the pipeline skipped. The parser holds
//! no mutable state between calls and its pattern tables are immutable
//! process-wide statics, so parsing independent documents in parallel is
//! just a matter of calling it from multiple threads.

pub mod config;
pub mod models;
pub mod parser;

pub use parser::{
    dedup_findings, Diagnostic, DiscardReason, MedicalDocumentParser, ParseOutcome, ParserError,
};

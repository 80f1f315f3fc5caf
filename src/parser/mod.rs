//! Multi-layer medical document parser.
//!
//! Layers, in pipeline order: date location, context windowing, medical
//! context classification, incidental finding detection, confidence scoring,
//! event assembly. Each layer is a pure function over text; the assembler
//! orchestrates them per located date plus one whole-document pass.

pub mod analyzer;
pub mod assembler;
pub mod confidence;
pub mod dates;
pub mod dictionary;
mod error;
pub mod findings;
pub mod provider;
pub mod types;
pub mod window;

pub use assembler::MedicalDocumentParser;
pub use error::ParserError;
pub use findings::dedup_findings;
pub use types::{Diagnostic, DiscardReason, ParseOutcome};

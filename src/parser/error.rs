//! Parser-level error type.
//!
//! The parse path itself never fails for bad document text (skips become
//! diagnostics); errors exist only for the fail-fast boundary: invalid
//! tuning values and invalid enum strings.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}

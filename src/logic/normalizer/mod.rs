//! Normalizer Module
//!
//! Converts unstructured log text into ordered, structured records.
//!
//! ## Structure
//! - `types`: Core types (Severity, LogRecord)
//! - `parser`: Normalization and severity inference logic
//!
//! ## Usage
//! ```ignore
//! use forensic_core::logic::normalizer::{normalize, Severity};
//!
//! let records = normalize(raw_text);
//! let criticals = records.iter().filter(|r| r.severity == Severity::Critical);
//! ```

pub mod parser;
pub mod types;

// Re-export main types for convenience
pub use parser::normalize;
pub use types::{LogRecord, Severity};

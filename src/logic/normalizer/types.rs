//! Normalizer Types
//!
//! Core types for normalized log records.
//! No logic here - data structures only.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// SEVERITY
// ============================================================================

/// Per-record classification, ordered lowest to highest.
/// Also serves as the filter key in the explorer surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            Severity::Info => 0,
            Severity::Low => 1,
            Severity::Medium => 2,
            Severity::High => 3,
            Severity::Critical => 4,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// LOG RECORD
// ============================================================================

/// One normalized log line. Immutable once produced by the normalizer.
///
/// `raw` reproduces the input line byte-for-byte; every other field is
/// derived best-effort and falls back to a sentinel, never to an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    /// Unique within one ingested batch
    pub id: Uuid,
    /// First three whitespace tokens, stored verbatim (no date parsing -
    /// the source format is heterogeneous by design)
    pub timestamp: String,
    /// Host/process identifier token, sentinel "unknown" if absent
    pub source: String,
    /// Portion of `source` before any bracketed pid suffix, sentinel "System"
    pub service: String,
    /// Remaining tokens, space-joined
    pub message: String,
    pub severity: Severity,
    /// Original unmodified line - the signature engine matches against this
    pub raw: String,
    /// Open extension point, never populated or read by the core
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

//! Log Normalizer
//!
//! Turns one raw multi-line text block into an ordered sequence of
//! structured records with heuristically inferred severity.
//!
//! Input: raw text, newline-separated
//! Output: Vec<LogRecord>, one per non-blank line, input order preserved

use uuid::Uuid;

use super::types::{LogRecord, Severity};
use crate::constants::{DEFAULT_SERVICE, UNKNOWN_SOURCE};

// ============================================================================
// NORMALIZATION
// ============================================================================

/// Normalize a raw text block into structured records.
///
/// Blank and whitespace-only lines are dropped. No line is ever rejected
/// for malformed structure: missing tokens degrade to sentinel values.
pub fn normalize(raw_text: &str) -> Vec<LogRecord> {
    raw_text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> LogRecord {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let timestamp = tokens[..tokens.len().min(3)].join(" ");
    let message = if tokens.len() > 4 {
        tokens[4..].join(" ")
    } else {
        String::new()
    };

    // Service strips the bracketed pid suffix: "sshd[2341]:" -> "sshd".
    // A line too short to carry a source gets both sentinels.
    let (source, service) = match tokens.get(3) {
        Some(token) => {
            let service = match token.split('[').next() {
                Some(s) if !s.is_empty() => s,
                _ => DEFAULT_SERVICE,
            };
            (token.to_string(), service.to_string())
        }
        None => (UNKNOWN_SOURCE.to_string(), DEFAULT_SERVICE.to_string()),
    };

    LogRecord {
        id: Uuid::new_v4(),
        timestamp,
        source,
        service,
        message,
        severity: infer_severity(line),
        raw: line.to_string(),
        metadata: None,
    }
}

// ============================================================================
// SEVERITY INFERENCE
// ============================================================================

/// Keyword-driven severity heuristic over the full line, case-insensitive.
///
/// Checks run in a fixed sequence and a later match overrides an earlier
/// one, so a line carrying both "fail" and "unauthorized" ends Critical.
/// The sequence is calibration data - keep it as written, not sorted by
/// severity.
fn infer_severity(line: &str) -> Severity {
    let lower = line.to_lowercase();

    let mut severity = Severity::Info;
    if lower.contains("fail") || lower.contains("error") {
        severity = Severity::High;
    }
    if lower.contains("warn") || lower.contains("block") {
        severity = Severity::Medium;
    }
    if lower.contains("critical") || lower.contains("unauthorized") {
        severity = Severity::Critical;
    }
    severity
}

// ============================================================================
// TESTS
// ============================================================================

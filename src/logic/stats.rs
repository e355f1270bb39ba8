//! Batch Statistics
//!
//! Derived counters for one record batch, consumed by dashboard surfaces.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::normalizer::{LogRecord, Severity};

/// Headline counters for one ingested batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchStats {
    pub total_logs: usize,
    pub critical_alerts: usize,
    pub unique_sources: usize,
    pub anomalies_detected: usize,
}

/// Compute headline counters over a batch.
///
/// The anomaly estimate is calibration carried over from the reference
/// behavior: 80% of High records (floored) plus every Critical record.
pub fn compute(records: &[LogRecord]) -> BatchStats {
    let unique_sources = records
        .iter()
        .map(|r| r.source.as_str())
        .collect::<HashSet<_>>()
        .len();
    let criticals = records
        .iter()
        .filter(|r| r.severity == Severity::Critical)
        .count();
    let highs = records
        .iter()
        .filter(|r| r.severity == Severity::High)
        .count();

    BatchStats {
        total_logs: records.len(),
        critical_alerts: criticals,
        unique_sources,
        anomalies_detected: (highs as f64 * 0.8).floor() as usize + criticals,
    }
}

//! Log Explorer Filters
//!
//! Query surface for the explorer view: case-insensitive search over the
//! raw line plus an optional severity filter. Record order is preserved.

use serde::{Deserialize, Serialize};

use super::normalizer::{LogRecord, Severity};

/// Filter criteria for one explorer query. Empty criteria match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogFilter {
    /// Substring matched case-insensitively against `raw`
    pub search: Option<String>,
    pub severity: Option<Severity>,
}

impl LogFilter {
    pub fn with_search(search: impl Into<String>) -> Self {
        Self {
            search: Some(search.into()),
            severity: None,
        }
    }

    pub fn with_severity(severity: Severity) -> Self {
        Self {
            search: None,
            severity: Some(severity),
        }
    }

    pub fn matches(&self, record: &LogRecord) -> bool {
        if let Some(term) = &self.search {
            if !record.raw.to_lowercase().contains(&term.to_lowercase()) {
                return false;
            }
        }
        if let Some(severity) = self.severity {
            if record.severity != severity {
                return false;
            }
        }
        true
    }

    /// Apply the filter, preserving batch order.
    pub fn apply<'a>(&self, records: &'a [LogRecord]) -> Vec<&'a LogRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SAMPLE_LOGS;
    use crate::logic::normalizer::normalize;

    #[test]
    fn test_default_filter_matches_all() {
        let records = normalize(SAMPLE_LOGS);
        assert_eq!(LogFilter::default().apply(&records).len(), records.len());
    }

    #[test]
    fn test_search_is_case_insensitive_and_ordered() {
        let records = normalize(SAMPLE_LOGS);
        let hits = LogFilter::with_search("FAILED PASSWORD").apply(&records);
        assert_eq!(hits.len(), 3);
        assert!(hits[0].raw.contains("45231"));
        assert!(hits[2].raw.contains("45239"));
    }

    #[test]
    fn test_severity_filter() {
        let records = normalize(SAMPLE_LOGS);
        let hits = LogFilter::with_severity(Severity::Critical).apply(&records);
        assert_eq!(hits.len(), 1);
        assert!(hits[0].raw.contains("Unauthorized"));
    }

    #[test]
    fn test_combined_criteria() {
        let records = normalize(SAMPLE_LOGS);
        let filter = LogFilter {
            search: Some("root".to_string()),
            severity: Some(Severity::High),
        };
        assert_eq!(filter.apply(&records).len(), 3);
    }
}

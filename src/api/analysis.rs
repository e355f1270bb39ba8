//! Analysis API - Async Surface for the Presentation Layer
//!
//! The engine itself is synchronous and pure; this layer runs it off the
//! caller's event loop and bounds it with a defensive deadline so a UI is
//! never blocked. No partial results: an error means no result at all.

use std::time::Duration;

use thiserror::Error;
use tokio::time::timeout;

use crate::constants;
use crate::logic::forensic::{self, AnalysisResult};
use crate::logic::normalizer::{self, LogRecord};

/// The one caller-visible failure mode: analysis could not complete.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("forensic analysis did not complete within {0} seconds")]
    Timeout(u64),
    #[error("forensic analysis task failed to complete")]
    TaskFailed,
}

/// Analyze a normalized batch off the caller's thread.
///
/// The deadline comes from `FORENSIC_ANALYSIS_TIMEOUT_SECS` when set,
/// otherwise [`constants::DEFAULT_ANALYSIS_TIMEOUT_SECS`].
pub async fn run_analysis(records: Vec<LogRecord>) -> Result<AnalysisResult, AnalysisError> {
    let deadline_secs = constants::get_analysis_timeout_secs();
    log::debug!(
        "starting analysis of {} records (deadline {}s)",
        records.len(),
        deadline_secs
    );

    let task = tokio::task::spawn_blocking(move || forensic::analyze(&records));

    match timeout(Duration::from_secs(deadline_secs), task).await {
        Ok(Ok(result)) => Ok(result),
        Ok(Err(e)) => {
            log::warn!("analysis task failed: {}", e);
            Err(AnalysisError::TaskFailed)
        }
        Err(_) => {
            log::warn!("analysis exceeded {}s deadline", deadline_secs);
            Err(AnalysisError::Timeout(deadline_secs))
        }
    }
}

/// Normalize a raw text block and analyze it in one call - the
/// ingest-then-scan flow.
pub async fn ingest_and_analyze(raw_text: &str) -> Result<AnalysisResult, AnalysisError> {
    let records = normalizer::normalize(raw_text);
    run_analysis(records).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SAMPLE_LOGS;

    #[tokio::test]
    async fn test_run_analysis_resolves() {
        let _ = env_logger::builder().is_test(true).try_init();
        let records = normalizer::normalize(SAMPLE_LOGS);
        let result = run_analysis(records).await.unwrap();
        assert!(!result.findings.is_empty());
    }

    #[tokio::test]
    async fn test_pipeline_end_to_end() {
        let mut lines = vec![
            "Feb 14 10:20:01 web-server-01 sshd[2341]: Failed password for root",
            "Feb 14 10:20:05 web-server-01 sshd[2341]: Failed password for root",
            "Feb 14 10:20:10 web-server-01 sshd[2341]: Failed password for root",
            "Feb 14 10:30:00 app-gateway nginx: GET /admin/config 403 562",
            "Feb 14 10:25:12 database-prod kernel: Out of memory: Kill process 890 (mysqld)",
        ];
        for _ in 0..5 {
            lines.push("Feb 14 10:21:45 firewall-edge filter[450]: INBOUND DROP TCP");
        }

        let result = ingest_and_analyze(&lines.join("\n")).await.unwrap();
        assert_eq!(result.findings.len(), 4);
        assert_eq!(result.risk_score, 100);
        assert!(result.summary.contains("HIGH"));
    }

    #[tokio::test]
    async fn test_empty_input_yields_clean_baseline() {
        let result = ingest_and_analyze("").await.unwrap();
        assert_eq!(result.risk_score, 5);
        assert!(result.findings.is_empty());
    }
}

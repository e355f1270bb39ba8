//! Forensic Engine
//!
//! Deterministic signature pass over one normalized batch.
//! 100% offline - no external API dependencies.
//!
//! Input: ordered LogRecord batch
//! Output: AnalysisResult (summary, findings, recommendations, risk score)

use crate::constants::UNKNOWN_HOST;
use crate::logic::normalizer::LogRecord;

use super::rules::{
    catalog, SignatureRule, CLEAN_BASELINE_SCORE, HIGH_PRIORITY_THRESHOLD, MAX_RISK_SCORE,
    MONITORING_BASELINE,
};
use super::types::{AnalysisResult, RecommendationSet, ThreatFinding};

// ============================================================================
// ANALYSIS
// ============================================================================

/// Run the full signature catalog over a batch.
///
/// Every rule is evaluated - no short-circuit - so all applicable findings
/// for the batch are reported together. Identical input batches yield
/// identical results.
pub fn analyze(records: &[LogRecord]) -> AnalysisResult {
    let mut findings: Vec<ThreatFinding> = Vec::new();
    let mut recommendations = RecommendationSet::new();
    let mut risk_score: u32 = 0;

    for rule in catalog() {
        let matched: Vec<&LogRecord> = records
            .iter()
            .filter(|r| rule.predicate.matches(&r.raw.to_lowercase()))
            .collect();

        // Strict threshold: a count exactly at the boundary does not trigger
        if matched.len() > rule.min_matches {
            log::debug!(
                "signature {} triggered on {} of {} records",
                rule.code,
                matched.len(),
                records.len()
            );
            findings.push(build_finding(rule, &matched));
            add_recommendations(rule, &matched, &mut recommendations);
            risk_score += rule.weight;
        }
    }

    // Distinct terminal branch: fixed score, not 0 + baseline
    if findings.is_empty() {
        log::info!("analysis clean: {} records, no signature matches", records.len());
        return clean_baseline();
    }

    let risk_score = (risk_score + MONITORING_BASELINE).min(MAX_RISK_SCORE) as u8;
    let priority = if risk_score > HIGH_PRIORITY_THRESHOLD {
        "HIGH"
    } else {
        "MEDIUM"
    };
    let summary = format!(
        "Local Forensic Engine identified {} actionable security alerts. \
         Data points to a {} priority incident involving potential {}.",
        findings.len(),
        priority,
        findings[0].name.to_lowercase()
    );

    log::info!(
        "analysis complete: {} findings, risk score {}",
        findings.len(),
        risk_score
    );

    AnalysisResult {
        summary,
        findings,
        recommendations: recommendations.into_vec(),
        risk_score,
    }
}

// ============================================================================
// FINDING & RECOMMENDATION TEXT
// ============================================================================

fn build_finding(rule: &SignatureRule, matched: &[&LogRecord]) -> ThreatFinding {
    let description = match rule.code {
        "T1110" => format!(
            "Identified {} failed login attempts. High correlation with password \
             guessing or automated dictionary attacks.",
            matched.len()
        ),
        "T1078" => {
            "Attempts detected to access restricted system objects or administrative \
             configuration endpoints."
                .to_string()
        }
        "T1046" => {
            "Anomalous volume of dropped packets detected. Pattern consistent with \
             internal port scanning or network discovery."
                .to_string()
        }
        "T1499" => {
            "Kernel reports process terminations due to memory exhaustion. Potential \
             indication of malicious resource consumption."
                .to_string()
        }
        other => format!("Signature {} matched {} records.", other, matched.len()),
    };

    ThreatFinding {
        id: rule.code.to_string(),
        name: rule.name.to_string(),
        description,
    }
}

fn add_recommendations(
    rule: &SignatureRule,
    matched: &[&LogRecord],
    recommendations: &mut RecommendationSet,
) {
    match rule.code {
        "T1110" => {
            recommendations.add("Enforce strictly managed local account lockout policies.");
            let host = matched
                .first()
                .map(|r| r.source.as_str())
                .unwrap_or(UNKNOWN_HOST);
            recommendations.add(format!("Review active sessions for host: {}", host));
        }
        "T1078" => recommendations.add("Verify ACLs on high-value file directories."),
        "T1046" => recommendations.add("Verify firewall rules on segment gateways."),
        "T1499" => {
            recommendations.add("Perform memory dump analysis on affected production hosts.")
        }
        _ => {}
    }
}

fn clean_baseline() -> AnalysisResult {
    AnalysisResult {
        summary: "Forensic analysis complete. All signatures within normal operational \
                  baseline. No known malicious TTP patterns detected in this log segment."
            .to_string(),
        findings: Vec::new(),
        recommendations: vec![
            "Maintain routine log rotation cycles.".to_string(),
            "Ensure central SOC sync is performed as per isolated network policy.".to_string(),
        ],
        risk_score: CLEAN_BASELINE_SCORE,
    }
}

// ============================================================================
// TESTS
// ============================================================================

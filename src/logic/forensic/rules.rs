//! Signature Catalog & Scoring Constants
//!
//! Built-in detection rules for isolated-network threats, plus the score
//! calibration the engine applies. No matching logic here - the engine
//! evaluates the catalog in the order given below, and the summary's
//! "first-triggered" wording depends on that order.

use once_cell::sync::Lazy;

// ============================================================================
// SCORING CALIBRATION
// ============================================================================

/// Flat score added for active monitoring when any rule triggers
pub const MONITORING_BASELINE: u32 = 5;

/// Risk score for a batch where no rule triggers
pub const CLEAN_BASELINE_SCORE: u8 = 5;

/// Ceiling applied once, after the baseline addition
pub const MAX_RISK_SCORE: u32 = 100;

/// Final score above this reports a HIGH priority incident, else MEDIUM
pub const HIGH_PRIORITY_THRESHOLD: u8 = 60;

// ============================================================================
// PREDICATES
// ============================================================================

/// Case-insensitive substring test applied to a record's raw line.
#[derive(Debug, Clone)]
pub enum RulePredicate {
    /// Any listed needle present
    AnyOf(&'static [&'static str]),
    /// The anchor present together with at least one listed needle
    AllWithAny {
        anchor: &'static str,
        any: &'static [&'static str],
    },
}

impl RulePredicate {
    /// `lowered` must already be lowercased by the caller.
    pub fn matches(&self, lowered: &str) -> bool {
        match self {
            RulePredicate::AnyOf(needles) => needles.iter().any(|n| lowered.contains(n)),
            RulePredicate::AllWithAny { anchor, any } => {
                lowered.contains(anchor) && any.iter().any(|n| lowered.contains(n))
            }
        }
    }
}

// ============================================================================
// RULE DESCRIPTOR
// ============================================================================

/// One detection rule: predicate, strict threshold, catalog identity, weight.
#[derive(Debug, Clone)]
pub struct SignatureRule {
    /// MITRE ATT&CK technique code
    pub code: &'static str,
    pub name: &'static str,
    pub predicate: RulePredicate,
    /// Rule triggers when match count is strictly greater than this
    pub min_matches: usize,
    /// Score contribution when triggered
    pub weight: u32,
}

// ============================================================================
// BUILT-IN CATALOG
// ============================================================================

fn builtin_catalog() -> Vec<SignatureRule> {
    vec![
        // Credential Access: password guessing / dictionary attacks
        SignatureRule {
            code: "T1110",
            name: "Local Brute Force Detection",
            predicate: RulePredicate::AnyOf(&["failed password", "authentication failure"]),
            min_matches: 2,
            weight: 45,
        },
        // Privilege Escalation / Discovery: restricted object access
        SignatureRule {
            code: "T1078",
            name: "Unauthorized Access Indicator",
            predicate: RulePredicate::AnyOf(&["unauthorized", "403", "permission denied"]),
            min_matches: 0,
            weight: 20,
        },
        // Discovery / Reconnaissance: anomalous dropped-packet volume
        SignatureRule {
            code: "T1046",
            name: "Network Reconnaissance Signature",
            predicate: RulePredicate::AnyOf(&["block", "deny", "drop"]),
            min_matches: 4,
            weight: 15,
        },
        // Impact / DoS: kernel-level memory exhaustion kills
        SignatureRule {
            code: "T1499",
            name: "Endpoint Denial of Service Indicator",
            predicate: RulePredicate::AllWithAny {
                anchor: "kernel",
                any: &["kill", "oom"],
            },
            min_matches: 0,
            weight: 15,
        },
    ]
}

static CATALOG: Lazy<Vec<SignatureRule>> = Lazy::new(builtin_catalog);

/// The built-in rules, in evaluation order.
pub fn catalog() -> &'static [SignatureRule] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_is_fixed() {
        let codes: Vec<&str> = catalog().iter().map(|r| r.code).collect();
        assert_eq!(codes, vec!["T1110", "T1078", "T1046", "T1499"]);
    }

    #[test]
    fn test_any_of_predicate() {
        let rule = &catalog()[0];
        assert!(rule.predicate.matches("jan 1 failed password for root"));
        assert!(!rule.predicate.matches("jan 1 session opened"));
    }

    #[test]
    fn test_all_with_any_predicate() {
        let rule = &catalog()[3];
        assert!(rule.predicate.matches("kernel: oom killer invoked"));
        assert!(!rule.predicate.matches("kernel: usb device attached"));
        assert!(!rule.predicate.matches("service kill requested by admin"));
    }
}

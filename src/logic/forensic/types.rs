//! Forensic Engine Types
//!
//! Output types for one analysis pass.
//! No logic here - data structures only.

use serde::{Deserialize, Serialize};

// ============================================================================
// THREAT FINDING
// ============================================================================

/// One matched detection rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreatFinding {
    /// Stable catalog code (MITRE ATT&CK technique, e.g. "T1110")
    pub id: String,
    pub name: String,
    /// May embed the match count or affected host, computed at match time
    pub description: String,
}

// ============================================================================
// ANALYSIS RESULT
// ============================================================================

/// Output of one engine run. Created fresh per call, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    /// Insertion order = rule evaluation order
    pub findings: Vec<ThreatFinding>,
    /// Duplicates collapsed, insertion order preserved
    pub recommendations: Vec<String>,
    /// Bounded [0, 100]
    pub risk_score: u8,
}

// ============================================================================
// RECOMMENDATION SET
// ============================================================================

/// Insertion-ordered unique string collection.
///
/// Display order affects output reproducibility, so a HashSet will not do:
/// a recommendation already added by an earlier rule keeps its first slot.
#[derive(Debug, Default)]
pub struct RecommendationSet {
    entries: Vec<String>,
}

impl RecommendationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, recommendation: impl Into<String>) {
        let recommendation = recommendation.into();
        if !self.entries.contains(&recommendation) {
            self.entries.push(recommendation);
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_serializes_for_presentation_layer() {
        let result = AnalysisResult {
            summary: "clean".to_string(),
            findings: vec![ThreatFinding {
                id: "T1110".to_string(),
                name: "Local Brute Force Detection".to_string(),
                description: "Identified 3 failed login attempts.".to_string(),
            }],
            recommendations: vec!["Review active sessions for host: web-server-01".to_string()],
            risk_score: 50,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["risk_score"], 50);
        assert_eq!(json["findings"][0]["id"], "T1110");
    }

    #[test]
    fn test_recommendation_set_deduplicates() {
        let mut set = RecommendationSet::new();
        set.add("rotate keys");
        set.add("review sessions");
        set.add("rotate keys");
        assert_eq!(set.into_vec(), vec!["rotate keys", "review sessions"]);
    }
}

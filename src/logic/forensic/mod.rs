//! Forensic Module - Signature-Based TTP Detection
//!
//! Rule-based deterministic engine for identifying known attack patterns
//! in a normalized log batch. This is the CORE STEP - where a batch is
//! scored and findings are produced.
//!
//! ## Structure
//! - `types`: Output types (ThreatFinding, AnalysisResult, RecommendationSet)
//! - `rules`: Built-in signature catalog and scoring calibration
//! - `engine`: Analysis logic
//!
//! ## Usage
//! ```ignore
//! use forensic_core::logic::forensic::analyze;
//!
//! let result = analyze(&records);
//! println!("risk score {}", result.risk_score);
//! ```

pub mod engine;
pub mod rules;
pub mod types;

// Re-export main types for convenience
pub use engine::analyze;
pub use rules::{catalog, RulePredicate, SignatureRule, HIGH_PRIORITY_THRESHOLD};
pub use types::{AnalysisResult, RecommendationSet, ThreatFinding};

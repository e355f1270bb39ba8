//! Portable Local Forensic Engine - Core
//!
//! Two-stage offline pipeline for isolated networks:
//! 1. Normalizer: unstructured text -> ordered records with inferred severity
//! 2. Signature engine: normalized batch -> findings, recommendations, risk score
//!
//! 100% offline - no external API dependencies. The presentation layer
//! (dashboard, explorer, report rendering) lives outside this crate and is
//! its only caller.

pub mod api;
pub mod constants;
pub mod logic;

// Re-export the boundary surface for convenience
pub use api::{ingest_and_analyze, run_analysis, AnalysisError};
pub use logic::explorer::LogFilter;
pub use logic::forensic::{analyze, AnalysisResult, ThreatFinding};
pub use logic::normalizer::{normalize, LogRecord, Severity};
pub use logic::stats::{compute as compute_stats, BatchStats};

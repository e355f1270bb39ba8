//! API - Caller-Facing Surface
//!
//! Async entry points consumed by the presentation layer.

pub mod analysis;

pub use analysis::{ingest_and_analyze, run_analysis, AnalysisError};

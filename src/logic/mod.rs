//! Core Logic
//!
//! Pure, offline computation. Data flows one way:
//! raw text -> `normalizer` -> ordered records -> `forensic` -> result.
//! `stats` and `explorer` are read-only views over a normalized batch.

pub mod explorer;
pub mod forensic;
pub mod normalizer;
pub mod stats;

//! Symptom triage: an explainable symptom-overlap rule matcher with prediction
//! bookkeeping and aggregate statistics.
//!
//! The scoring engine is a bounded rule matcher over a fixed catalog. It is not
//! a learned classifier and makes no claim of medical validity.

pub mod catalog;
pub mod config;
pub mod error;
pub mod prediction;
pub mod scoring;
pub mod telemetry;

//! Prediction recording, history, catalog browsing, and usage statistics.
//!
//! Scoring itself lives in [`crate::scoring`]; this module wires an outcome into
//! the persisted catalog and event log through the [`PredictionStore`] seam.

pub mod domain;
pub mod memory;
pub mod repository;
pub mod router;
pub mod service;
pub mod statistics;

#[cfg(test)]
mod tests;

pub use domain::{
    Disease, DiseaseId, NewDisease, PredictionEvent, PredictionId, Role, Symptom, SymptomId,
    UserAccount, UserId,
};
pub use memory::InMemoryStore;
pub use repository::{CatalogWriter, IdentityResolver, PredictionStore, StoreError};
pub use router::{triage_router, ProfileUpdate, TriageState, CALLER_HEADER};
pub use service::{
    HistoryEntry, PredictionRecord, PredictionService, PredictionServiceError, UserProfile,
};
pub use statistics::{Statistics, StatisticsService, TopDisease};

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::scoring::{Outcome, ScoringEngine};

use super::domain::{
    normalize_name, Disease, NewDisease, NewPredictionEvent, PredictionId, Role, UserAccount,
    UserId, AUTO_GENERATED_DESCRIPTION,
};
use super::repository::{CatalogWriter, IdentityResolver, PredictionStore, StoreError};

/// Response for one completed prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRecord {
    pub prediction_id: PredictionId,
    pub disease_name: String,
    pub confidence: f64,
    pub precautions: String,
    pub timestamp: DateTime<Utc>,
}

/// One row of a caller's prediction history.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub prediction_id: PredictionId,
    pub disease_name: String,
    pub confidence: f64,
    pub precautions: String,
    pub timestamp: DateTime<Utc>,
}

/// Caller's own account with their prediction tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub total_predictions: u64,
}

/// Orchestrates scoring with catalog growth and event recording.
pub struct PredictionService<S> {
    store: Arc<S>,
    engine: Arc<ScoringEngine>,
}

impl<S> PredictionService<S>
where
    S: PredictionStore + IdentityResolver + 'static,
{
    pub fn new(store: Arc<S>, engine: Arc<ScoringEngine>) -> Self {
        Self { store, engine }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Resolve the caller to a registered account or fail before any write.
    pub fn authenticate(&self, caller: &str) -> Result<UserAccount, PredictionServiceError> {
        match self.store.resolve(caller)? {
            Some(account) => Ok(account),
            None => {
                warn!(caller, "rejecting unresolvable caller");
                Err(PredictionServiceError::UserNotFound(caller.to_string()))
            }
        }
    }

    /// Score `symptoms` for `caller` and record the outcome.
    pub fn submit(
        &self,
        caller: &str,
        symptoms: &[String],
    ) -> Result<PredictionRecord, PredictionServiceError> {
        let user = self.authenticate(caller)?;
        let outcome = self.engine.predict(symptoms);

        let event = self.store.write(|tx| {
            let disease = resolve_or_create_disease(tx, &outcome)?;
            register_symptoms(tx, symptoms)?;
            tx.create_prediction_event(NewPredictionEvent {
                user_id: user.id,
                disease_id: disease.id,
                confidence: outcome.confidence,
                created_at: Utc::now(),
            })
        })?;

        info!(
            user = user.id.0,
            disease = %outcome.disease_name,
            confidence = outcome.confidence,
            "prediction recorded"
        );

        Ok(PredictionRecord {
            prediction_id: event.id,
            disease_name: outcome.disease_name,
            confidence: outcome.confidence,
            precautions: outcome.precautions,
            timestamp: event.created_at,
        })
    }

    /// The caller's predictions, newest first.
    pub fn history_for(&self, caller: &str) -> Result<Vec<HistoryEntry>, PredictionServiceError> {
        let user = self.authenticate(caller)?;
        let events = self.store.list_events_for_user(user.id)?;
        Ok(events
            .into_iter()
            .map(|resolved| HistoryEntry {
                prediction_id: resolved.event.id,
                disease_name: resolved.disease.name,
                confidence: resolved.event.confidence,
                precautions: resolved.disease.precautions,
                timestamp: resolved.event.created_at,
            })
            .collect())
    }

    pub fn profile_for(&self, caller: &str) -> Result<UserProfile, PredictionServiceError> {
        let user = self.authenticate(caller)?;
        self.profile(user)
    }

    /// Replace the caller's display name; `name` must not be blank.
    pub fn update_profile(
        &self,
        caller: &str,
        name: &str,
    ) -> Result<UserProfile, PredictionServiceError> {
        if name.trim().is_empty() {
            return Err(PredictionServiceError::BlankName);
        }
        let user = self.authenticate(caller)?;
        let renamed = self.store.rename_user(user.id, name)?;
        info!(user = renamed.id.0, "profile updated");
        self.profile(renamed)
    }

    fn profile(&self, user: UserAccount) -> Result<UserProfile, PredictionServiceError> {
        let total_predictions = self.store.count_events_for_user(user.id)?;
        Ok(UserProfile {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            total_predictions,
        })
    }
}

fn resolve_or_create_disease(
    tx: &mut dyn CatalogWriter,
    outcome: &Outcome,
) -> Result<Disease, StoreError> {
    if let Some(disease) = tx.find_disease_by_name(&outcome.disease_name)? {
        return Ok(disease);
    }

    let created = tx.create_disease(NewDisease {
        name: outcome.disease_name.clone(),
        description: AUTO_GENERATED_DESCRIPTION.to_string(),
        precautions: outcome.precautions.clone(),
    });
    match created {
        Ok(disease) => {
            debug!(disease = %disease.name, "provisioned disease from rule outcome");
            Ok(disease)
        }
        Err(StoreError::Conflict) => tx
            .find_disease_by_name(&outcome.disease_name)?
            .ok_or(StoreError::NotFound),
        Err(other) => Err(other),
    }
}

fn register_symptoms(tx: &mut dyn CatalogWriter, symptoms: &[String]) -> Result<(), StoreError> {
    let mut seen = HashSet::new();
    for raw in symptoms {
        let name = normalize_name(raw);
        if name.is_empty() || !seen.insert(name.clone()) {
            continue;
        }
        if tx.find_symptom_by_name(&name)?.is_some() {
            continue;
        }
        match tx.create_symptom(&name) {
            Ok(symptom) => debug!(symptom = %symptom.name, "registered new symptom"),
            Err(StoreError::Conflict) => {}
            Err(other) => return Err(other),
        }
    }
    Ok(())
}

/// Error raised by the prediction service.
#[derive(Debug, thiserror::Error)]
pub enum PredictionServiceError {
    #[error("user not found: {0}")]
    UserNotFound(String),
    #[error("name is required")]
    BlankName,
    #[error(transparent)]
    Store(#[from] StoreError),
}

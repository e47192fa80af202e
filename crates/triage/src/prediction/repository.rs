use super::domain::{
    Disease, DiseaseId, NewDisease, NewPredictionEvent, PredictionEvent, ResolvedPrediction,
    Symptom, UserAccount, UserId,
};

/// Maps an authenticated caller principal onto a registered account.
pub trait IdentityResolver: Send + Sync {
    fn resolve(&self, caller: &str) -> Result<Option<UserAccount>, StoreError>;
}

/// Write handle scoped to a single unit of work.
///
/// `create_*` must fail with [`StoreError::Conflict`] when the unique name is
/// already taken, so callers can re-fetch instead of racing a check-then-act.
pub trait CatalogWriter {
    fn find_disease_by_name(&self, name: &str) -> Result<Option<Disease>, StoreError>;
    fn create_disease(&mut self, disease: NewDisease) -> Result<Disease, StoreError>;
    fn find_symptom_by_name(&self, name: &str) -> Result<Option<Symptom>, StoreError>;
    fn create_symptom(&mut self, name: &str) -> Result<Symptom, StoreError>;
    fn create_prediction_event(
        &mut self,
        event: NewPredictionEvent,
    ) -> Result<PredictionEvent, StoreError>;
}

/// Storage abstraction for catalogs and the prediction event log.
pub trait PredictionStore: Send + Sync {
    /// Runs `work` atomically: either every write it performs becomes visible,
    /// or none does.
    fn write<T, F>(&self, work: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut dyn CatalogWriter) -> Result<T, StoreError>;

    /// Events owned by `user`, newest first.
    fn list_events_for_user(&self, user: UserId) -> Result<Vec<ResolvedPrediction>, StoreError>;
    fn list_all_events(&self) -> Result<Vec<ResolvedPrediction>, StoreError>;

    fn count_events_for_user(&self, user: UserId) -> Result<u64, StoreError>;

    fn list_users(&self) -> Result<Vec<UserAccount>, StoreError>;
    /// Replaces the display name of `user`; `NotFound` when the account is gone.
    fn rename_user(&self, user: UserId, name: &str) -> Result<UserAccount, StoreError>;

    fn count_users(&self) -> Result<u64, StoreError>;
    fn count_diseases(&self) -> Result<u64, StoreError>;
    fn count_symptoms(&self) -> Result<u64, StoreError>;

    fn list_diseases(&self) -> Result<Vec<Disease>, StoreError>;
    fn find_disease(&self, id: DiseaseId) -> Result<Option<Disease>, StoreError>;
    fn list_symptoms(&self) -> Result<Vec<Symptom>, StoreError>;

    /// Administrative writer: updates `id` when given, otherwise creates.
    fn save_disease(
        &self,
        id: Option<DiseaseId>,
        disease: NewDisease,
    ) -> Result<Disease, StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

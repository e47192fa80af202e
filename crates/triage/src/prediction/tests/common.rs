use std::cell::RefCell;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::response::Response;
use axum::Router;
use serde_json::Value;

use crate::prediction::domain::{
    normalize_name, Disease, DiseaseId, NewDisease, NewPredictionEvent, PredictionEvent,
    ResolvedPrediction, Role, Symptom, UserAccount, UserId,
};
use crate::prediction::memory::InMemoryStore;
use crate::prediction::repository::{
    CatalogWriter, IdentityResolver, PredictionStore, StoreError,
};
use crate::prediction::router::{triage_router, TriageState};
use crate::prediction::service::PredictionService;
use crate::scoring::ScoringEngine;

pub(super) const ADMIN_EMAIL: &str = "admin@demo.com";
pub(super) const USER_EMAIL: &str = "user@demo.com";

pub(super) fn symptoms(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

pub(super) fn seeded_store() -> InMemoryStore {
    let store = InMemoryStore::with_seed_catalog();
    register_demo_users(&store);
    store
}

pub(super) fn register_demo_users(store: &InMemoryStore) {
    store
        .register_user("Admin", ADMIN_EMAIL, Role::Admin)
        .expect("admin registers");
    store
        .register_user("Demo User", USER_EMAIL, Role::User)
        .expect("user registers");
}

pub(super) fn build_service() -> (PredictionService<InMemoryStore>, Arc<InMemoryStore>) {
    service_over(seeded_store())
}

pub(super) fn service_over<S>(store: S) -> (PredictionService<S>, Arc<S>)
where
    S: PredictionStore + IdentityResolver + 'static,
{
    let store = Arc::new(store);
    let service = PredictionService::new(store.clone(), Arc::new(ScoringEngine::standard()));
    (service, store)
}

pub(super) fn router_with_service(service: PredictionService<InMemoryStore>) -> Router {
    triage_router(TriageState::new(Arc::new(service)))
}

/// Runs each unit of work to completion, then reports an outage so nothing commits.
#[derive(Default, Clone)]
pub(super) struct FlakyStore {
    pub(super) inner: InMemoryStore,
}

impl IdentityResolver for FlakyStore {
    fn resolve(&self, caller: &str) -> Result<Option<UserAccount>, StoreError> {
        self.inner.resolve(caller)
    }
}

impl PredictionStore for FlakyStore {
    fn write<T, F>(&self, work: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut dyn CatalogWriter) -> Result<T, StoreError>,
    {
        self.inner.write(|tx| {
            work(tx)?;
            Err(StoreError::Unavailable("commit failed".to_string()))
        })
    }

    fn list_events_for_user(&self, user: UserId) -> Result<Vec<ResolvedPrediction>, StoreError> {
        self.inner.list_events_for_user(user)
    }

    fn list_all_events(&self) -> Result<Vec<ResolvedPrediction>, StoreError> {
        self.inner.list_all_events()
    }

    fn count_events_for_user(&self, user: UserId) -> Result<u64, StoreError> {
        self.inner.count_events_for_user(user)
    }

    fn list_users(&self) -> Result<Vec<UserAccount>, StoreError> {
        self.inner.list_users()
    }

    fn rename_user(&self, user: UserId, name: &str) -> Result<UserAccount, StoreError> {
        self.inner.rename_user(user, name)
    }

    fn count_users(&self) -> Result<u64, StoreError> {
        self.inner.count_users()
    }

    fn count_diseases(&self) -> Result<u64, StoreError> {
        self.inner.count_diseases()
    }

    fn count_symptoms(&self) -> Result<u64, StoreError> {
        self.inner.count_symptoms()
    }

    fn list_diseases(&self) -> Result<Vec<Disease>, StoreError> {
        self.inner.list_diseases()
    }

    fn find_disease(&self, id: DiseaseId) -> Result<Option<Disease>, StoreError> {
        self.inner.find_disease(id)
    }

    fn list_symptoms(&self) -> Result<Vec<Symptom>, StoreError> {
        self.inner.list_symptoms()
    }

    fn save_disease(
        &self,
        id: Option<DiseaseId>,
        disease: NewDisease,
    ) -> Result<Disease, StoreError> {
        self.inner.save_disease(id, disease)
    }
}

pub(super) struct UnavailableStore;

impl IdentityResolver for UnavailableStore {
    fn resolve(&self, _caller: &str) -> Result<Option<UserAccount>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

impl PredictionStore for UnavailableStore {
    fn write<T, F>(&self, _work: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut dyn CatalogWriter) -> Result<T, StoreError>,
    {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn list_events_for_user(&self, _user: UserId) -> Result<Vec<ResolvedPrediction>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn list_all_events(&self) -> Result<Vec<ResolvedPrediction>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn count_events_for_user(&self, _user: UserId) -> Result<u64, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn list_users(&self) -> Result<Vec<UserAccount>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn rename_user(&self, _user: UserId, _name: &str) -> Result<UserAccount, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn count_users(&self) -> Result<u64, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn count_diseases(&self) -> Result<u64, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn count_symptoms(&self) -> Result<u64, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn list_diseases(&self) -> Result<Vec<Disease>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn find_disease(&self, _id: DiseaseId) -> Result<Option<Disease>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn list_symptoms(&self) -> Result<Vec<Symptom>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn save_disease(
        &self,
        _id: Option<DiseaseId>,
        _disease: NewDisease,
    ) -> Result<Disease, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

/// Hides each catalog row from its first lookup inside a unit of work, as if a
/// concurrent writer inserted it between the lookup and the insert.
#[derive(Default, Clone)]
pub(super) struct ConflictingStore {
    pub(super) inner: InMemoryStore,
    pub(super) conflicts: Arc<AtomicUsize>,
}

impl ConflictingStore {
    pub(super) fn conflicts(&self) -> usize {
        self.conflicts.load(Ordering::SeqCst)
    }
}

struct RacingWriter<'a> {
    inner: &'a mut dyn CatalogWriter,
    conflicts: &'a AtomicUsize,
    looked_up_diseases: RefCell<HashSet<String>>,
    looked_up_symptoms: RefCell<HashSet<String>>,
}

impl RacingWriter<'_> {
    fn record<T>(&self, result: Result<T, StoreError>) -> Result<T, StoreError> {
        if matches!(result, Err(StoreError::Conflict)) {
            self.conflicts.fetch_add(1, Ordering::SeqCst);
        }
        result
    }
}

impl CatalogWriter for RacingWriter<'_> {
    fn find_disease_by_name(&self, name: &str) -> Result<Option<Disease>, StoreError> {
        if self.looked_up_diseases.borrow_mut().insert(normalize_name(name)) {
            return Ok(None);
        }
        self.inner.find_disease_by_name(name)
    }

    fn create_disease(&mut self, disease: NewDisease) -> Result<Disease, StoreError> {
        let result = self.inner.create_disease(disease);
        self.record(result)
    }

    fn find_symptom_by_name(&self, name: &str) -> Result<Option<Symptom>, StoreError> {
        if self.looked_up_symptoms.borrow_mut().insert(normalize_name(name)) {
            return Ok(None);
        }
        self.inner.find_symptom_by_name(name)
    }

    fn create_symptom(&mut self, name: &str) -> Result<Symptom, StoreError> {
        let result = self.inner.create_symptom(name);
        self.record(result)
    }

    fn create_prediction_event(
        &mut self,
        event: NewPredictionEvent,
    ) -> Result<PredictionEvent, StoreError> {
        self.inner.create_prediction_event(event)
    }
}

impl IdentityResolver for ConflictingStore {
    fn resolve(&self, caller: &str) -> Result<Option<UserAccount>, StoreError> {
        self.inner.resolve(caller)
    }
}

impl PredictionStore for ConflictingStore {
    fn write<T, F>(&self, work: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut dyn CatalogWriter) -> Result<T, StoreError>,
    {
        let conflicts = self.conflicts.as_ref();
        self.inner.write(move |tx| {
            let mut racing = RacingWriter {
                inner: tx,
                conflicts,
                looked_up_diseases: RefCell::default(),
                looked_up_symptoms: RefCell::default(),
            };
            work(&mut racing)
        })
    }

    fn list_events_for_user(&self, user: UserId) -> Result<Vec<ResolvedPrediction>, StoreError> {
        self.inner.list_events_for_user(user)
    }

    fn list_all_events(&self) -> Result<Vec<ResolvedPrediction>, StoreError> {
        self.inner.list_all_events()
    }

    fn count_events_for_user(&self, user: UserId) -> Result<u64, StoreError> {
        self.inner.count_events_for_user(user)
    }

    fn list_users(&self) -> Result<Vec<UserAccount>, StoreError> {
        self.inner.list_users()
    }

    fn rename_user(&self, user: UserId, name: &str) -> Result<UserAccount, StoreError> {
        self.inner.rename_user(user, name)
    }

    fn count_users(&self) -> Result<u64, StoreError> {
        self.inner.count_users()
    }

    fn count_diseases(&self) -> Result<u64, StoreError> {
        self.inner.count_diseases()
    }

    fn count_symptoms(&self) -> Result<u64, StoreError> {
        self.inner.count_symptoms()
    }

    fn list_diseases(&self) -> Result<Vec<Disease>, StoreError> {
        self.inner.list_diseases()
    }

    fn find_disease(&self, id: DiseaseId) -> Result<Option<Disease>, StoreError> {
        self.inner.find_disease(id)
    }

    fn list_symptoms(&self) -> Result<Vec<Symptom>, StoreError> {
        self.inner.list_symptoms()
    }

    fn save_disease(
        &self,
        id: Option<DiseaseId>,
        disease: NewDisease,
    ) -> Result<Disease, StoreError> {
        self.inner.save_disease(id, disease)
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

//! Mutex-backed store used by the service binary and tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::catalog::seed;

use super::domain::{
    normalize_name, Disease, DiseaseId, NewDisease, NewPredictionEvent, PredictionEvent,
    PredictionId, ResolvedPrediction, Role, Symptom, SymptomId, UserAccount, UserId,
};
use super::repository::{CatalogWriter, IdentityResolver, PredictionStore, StoreError};

#[derive(Debug, Default)]
struct StoreState {
    users: Vec<UserAccount>,
    diseases: BTreeMap<DiseaseId, Disease>,
    disease_names: HashMap<String, DiseaseId>,
    symptoms: BTreeMap<SymptomId, Symptom>,
    symptom_names: HashMap<String, SymptomId>,
    events: Vec<PredictionEvent>,
    next_disease: u64,
    next_symptom: u64,
    next_event: u64,
}

impl StoreState {
    fn insert_disease(&mut self, disease: Disease) {
        self.disease_names
            .insert(normalize_name(&disease.name), disease.id);
        self.next_disease = self.next_disease.max(disease.id.0);
        self.diseases.insert(disease.id, disease);
    }

    fn insert_symptom(&mut self, symptom: Symptom) {
        self.symptom_names.insert(symptom.name.clone(), symptom.id);
        self.next_symptom = self.next_symptom.max(symptom.id.0);
        self.symptoms.insert(symptom.id, symptom);
    }

    fn apply(&mut self, changes: StagedChanges) {
        for disease in changes.diseases {
            self.insert_disease(disease);
        }
        for symptom in changes.symptoms {
            self.insert_symptom(symptom);
        }
        for event in changes.events {
            self.next_event = self.next_event.max(event.id.0);
            self.events.push(event);
        }
    }

    fn resolve(&self, event: &PredictionEvent) -> Result<ResolvedPrediction, StoreError> {
        let disease = self
            .diseases
            .get(&event.disease_id)
            .cloned()
            .ok_or(StoreError::NotFound)?;
        Ok(ResolvedPrediction {
            event: event.clone(),
            disease,
        })
    }
}

/// In-process store enforcing unique disease and symptom names.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the seed disease and symptom catalogs.
    pub fn with_seed_catalog() -> Self {
        let mut state = StoreState::default();
        for (name, description, precautions) in seed::DISEASES {
            let id = DiseaseId(state.next_disease + 1);
            state.insert_disease(Disease {
                id,
                name: (*name).to_string(),
                description: (*description).to_string(),
                precautions: (*precautions).to_string(),
            });
        }
        for name in seed::SYMPTOMS {
            let id = SymptomId(state.next_symptom + 1);
            state.insert_symptom(Symptom {
                id,
                name: normalize_name(name),
            });
        }
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn register_user(
        &self,
        name: &str,
        email: &str,
        role: Role,
    ) -> Result<UserAccount, StoreError> {
        let mut state = self.lock()?;
        if state
            .users
            .iter()
            .any(|user| user.email.eq_ignore_ascii_case(email))
        {
            return Err(StoreError::Conflict);
        }
        let account = UserAccount {
            id: UserId(state.users.len() as u64 + 1),
            name: name.to_string(),
            email: email.to_string(),
            role,
        };
        state.users.push(account.clone());
        Ok(account)
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, StoreError> {
        self.state
            .lock()
            .map_err(|_| StoreError::Unavailable("store mutex poisoned".to_string()))
    }
}

impl IdentityResolver for InMemoryStore {
    fn resolve(&self, caller: &str) -> Result<Option<UserAccount>, StoreError> {
        let state = self.lock()?;
        Ok(state
            .users
            .iter()
            .find(|user| user.email.eq_ignore_ascii_case(caller.trim()))
            .cloned())
    }
}

impl PredictionStore for InMemoryStore {
    fn write<T, F>(&self, work: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut dyn CatalogWriter) -> Result<T, StoreError>,
    {
        let mut state = self.lock()?;
        let mut staged = StagedWrite::new(&state);
        let value = work(&mut staged)?;
        let changes = staged.into_changes();
        state.apply(changes);
        Ok(value)
    }

    fn list_events_for_user(&self, user: UserId) -> Result<Vec<ResolvedPrediction>, StoreError> {
        let state = self.lock()?;
        let mut events = state
            .events
            .iter()
            .filter(|event| event.user_id == user)
            .map(|event| state.resolve(event))
            .collect::<Result<Vec<_>, _>>()?;
        events.sort_by(|a, b| {
            b.event
                .created_at
                .cmp(&a.event.created_at)
                .then(b.event.id.cmp(&a.event.id))
        });
        Ok(events)
    }

    fn list_all_events(&self) -> Result<Vec<ResolvedPrediction>, StoreError> {
        let state = self.lock()?;
        state
            .events
            .iter()
            .map(|event| state.resolve(event))
            .collect()
    }

    fn count_events_for_user(&self, user: UserId) -> Result<u64, StoreError> {
        let state = self.lock()?;
        Ok(state
            .events
            .iter()
            .filter(|event| event.user_id == user)
            .count() as u64)
    }

    fn list_users(&self) -> Result<Vec<UserAccount>, StoreError> {
        Ok(self.lock()?.users.clone())
    }

    fn rename_user(&self, user: UserId, name: &str) -> Result<UserAccount, StoreError> {
        let mut state = self.lock()?;
        let account = state
            .users
            .iter_mut()
            .find(|account| account.id == user)
            .ok_or(StoreError::NotFound)?;
        account.name = name.trim().to_string();
        Ok(account.clone())
    }

    fn count_users(&self) -> Result<u64, StoreError> {
        Ok(self.lock()?.users.len() as u64)
    }

    fn count_diseases(&self) -> Result<u64, StoreError> {
        Ok(self.lock()?.diseases.len() as u64)
    }

    fn count_symptoms(&self) -> Result<u64, StoreError> {
        Ok(self.lock()?.symptoms.len() as u64)
    }

    fn list_diseases(&self) -> Result<Vec<Disease>, StoreError> {
        Ok(self.lock()?.diseases.values().cloned().collect())
    }

    fn find_disease(&self, id: DiseaseId) -> Result<Option<Disease>, StoreError> {
        Ok(self.lock()?.diseases.get(&id).cloned())
    }

    fn list_symptoms(&self) -> Result<Vec<Symptom>, StoreError> {
        Ok(self.lock()?.symptoms.values().cloned().collect())
    }

    fn save_disease(
        &self,
        id: Option<DiseaseId>,
        disease: NewDisease,
    ) -> Result<Disease, StoreError> {
        let mut state = self.lock()?;
        let key = normalize_name(&disease.name);
        let id = match id {
            Some(id) => {
                let previous = state.diseases.get(&id).ok_or(StoreError::NotFound)?;
                let previous_key = normalize_name(&previous.name);
                if state.disease_names.get(&key).is_some_and(|owner| *owner != id) {
                    return Err(StoreError::Conflict);
                }
                state.disease_names.remove(&previous_key);
                id
            }
            None => {
                if state.disease_names.contains_key(&key) {
                    return Err(StoreError::Conflict);
                }
                DiseaseId(state.next_disease + 1)
            }
        };

        let record = Disease {
            id,
            name: disease.name.trim().to_string(),
            description: disease.description,
            precautions: disease.precautions,
        };
        state.insert_disease(record.clone());
        Ok(record)
    }
}

#[derive(Debug, Default)]
struct StagedChanges {
    diseases: Vec<Disease>,
    symptoms: Vec<Symptom>,
    events: Vec<PredictionEvent>,
}

/// Buffers writes over a read-only view of the committed state.
struct StagedWrite<'a> {
    base: &'a StoreState,
    changes: StagedChanges,
}

impl<'a> StagedWrite<'a> {
    fn new(base: &'a StoreState) -> Self {
        Self {
            base,
            changes: StagedChanges::default(),
        }
    }

    fn into_changes(self) -> StagedChanges {
        self.changes
    }

    fn next_disease_id(&self) -> DiseaseId {
        DiseaseId(self.base.next_disease + self.changes.diseases.len() as u64 + 1)
    }

    fn next_symptom_id(&self) -> SymptomId {
        SymptomId(self.base.next_symptom + self.changes.symptoms.len() as u64 + 1)
    }

    fn next_event_id(&self) -> PredictionId {
        PredictionId(self.base.next_event + self.changes.events.len() as u64 + 1)
    }
}

impl CatalogWriter for StagedWrite<'_> {
    fn find_disease_by_name(&self, name: &str) -> Result<Option<Disease>, StoreError> {
        let key = normalize_name(name);
        let staged = self
            .changes
            .diseases
            .iter()
            .find(|disease| normalize_name(&disease.name) == key);
        if let Some(disease) = staged {
            return Ok(Some(disease.clone()));
        }
        Ok(self
            .base
            .disease_names
            .get(&key)
            .and_then(|id| self.base.diseases.get(id))
            .cloned())
    }

    fn create_disease(&mut self, disease: NewDisease) -> Result<Disease, StoreError> {
        if self.find_disease_by_name(&disease.name)?.is_some() {
            return Err(StoreError::Conflict);
        }
        let record = Disease {
            id: self.next_disease_id(),
            name: disease.name.trim().to_string(),
            description: disease.description,
            precautions: disease.precautions,
        };
        self.changes.diseases.push(record.clone());
        Ok(record)
    }

    fn find_symptom_by_name(&self, name: &str) -> Result<Option<Symptom>, StoreError> {
        let key = normalize_name(name);
        let staged = self
            .changes
            .symptoms
            .iter()
            .find(|symptom| symptom.name == key);
        if let Some(symptom) = staged {
            return Ok(Some(symptom.clone()));
        }
        Ok(self
            .base
            .symptom_names
            .get(&key)
            .and_then(|id| self.base.symptoms.get(id))
            .cloned())
    }

    fn create_symptom(&mut self, name: &str) -> Result<Symptom, StoreError> {
        if self.find_symptom_by_name(name)?.is_some() {
            return Err(StoreError::Conflict);
        }
        let record = Symptom {
            id: self.next_symptom_id(),
            name: normalize_name(name),
        };
        self.changes.symptoms.push(record.clone());
        Ok(record)
    }

    fn create_prediction_event(
        &mut self,
        event: NewPredictionEvent,
    ) -> Result<PredictionEvent, StoreError> {
        let known_disease = self.base.diseases.contains_key(&event.disease_id)
            || self
                .changes
                .diseases
                .iter()
                .any(|disease| disease.id == event.disease_id);
        if !known_disease {
            return Err(StoreError::NotFound);
        }
        let record = PredictionEvent {
            id: self.next_event_id(),
            user_id: event.user_id,
            disease_id: event.disease_id,
            confidence: event.confidence,
            created_at: event.created_at,
        };
        self.changes.events.push(record.clone());
        Ok(record)
    }
}

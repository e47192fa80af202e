use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;
use triage::catalog::RuleCatalog;
use triage::config::SeedConfig;
use triage::error::AppError;
use triage::prediction::{InMemoryStore, Role, StoreError};
use triage::scoring::ScoringEngine;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) const DEMO_ACCOUNTS: &[(&str, &str, Role)] = &[
    ("Admin", "admin@demo.com", Role::Admin),
    ("Demo User", "user@demo.com", Role::User),
];

/// Engine over the built-in rule table, checked once at startup.
pub(crate) fn scoring_engine() -> Result<Arc<ScoringEngine>, AppError> {
    let catalog = RuleCatalog::standard();
    catalog.validate()?;
    Ok(Arc::new(ScoringEngine::new(Arc::new(catalog))))
}

pub(crate) fn seeded_store(seed: &SeedConfig) -> InMemoryStore {
    let store = InMemoryStore::with_seed_catalog();
    if seed.demo_users {
        for (name, email, role) in DEMO_ACCOUNTS {
            match store.register_user(name, email, *role) {
                Ok(account) => info!(email = %account.email, role = ?account.role, "seeded demo account"),
                Err(StoreError::Conflict) => {}
                Err(err) => tracing::warn!(%email, error = %err, "demo account not seeded"),
            }
        }
    }
    store
}

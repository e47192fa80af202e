use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{DiseaseId, NewDisease, UserAccount};
use super::repository::{IdentityResolver, PredictionStore, StoreError};
use super::service::{PredictionService, PredictionServiceError};
use super::statistics::StatisticsService;

/// Header carrying the principal established by the upstream auth layer.
pub const CALLER_HEADER: &str = "x-user-email";

const EMPTY_SYMPTOMS_MESSAGE: &str = "Please select at least one symptom";

/// Shared handler state; cloning only bumps reference counts.
pub struct TriageState<S> {
    pub predictions: Arc<PredictionService<S>>,
    pub statistics: Arc<StatisticsService<S>>,
}

impl<S> Clone for TriageState<S> {
    fn clone(&self) -> Self {
        Self {
            predictions: Arc::clone(&self.predictions),
            statistics: Arc::clone(&self.statistics),
        }
    }
}

impl<S> TriageState<S>
where
    S: PredictionStore + IdentityResolver + 'static,
{
    pub fn new(service: Arc<PredictionService<S>>) -> Self {
        let statistics = Arc::new(StatisticsService::new(Arc::clone(service.store())));
        Self {
            predictions: service,
            statistics,
        }
    }

    fn store(&self) -> &S {
        self.predictions.store()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PredictionRequest {
    #[serde(default)]
    pub symptoms: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

/// Router exposing prediction, catalog, and statistics endpoints.
pub fn triage_router<S>(state: TriageState<S>) -> Router
where
    S: PredictionStore + IdentityResolver + 'static,
{
    Router::new()
        .route("/predict", post(predict_handler::<S>))
        .route("/predictions", post(predict_handler::<S>))
        .route("/predictions/me", get(history_handler::<S>))
        .route(
            "/users/me",
            get(profile_handler::<S>).put(update_profile_handler::<S>),
        )
        .route("/symptoms", get(symptoms_handler::<S>))
        .route("/diseases", get(diseases_handler::<S>))
        .route("/diseases/search", get(search_diseases_handler::<S>))
        .route("/diseases/:disease_id", get(disease_handler::<S>))
        .route("/admin/statistics", get(statistics_handler::<S>))
        .route("/admin/users", get(users_handler::<S>))
        .route(
            "/admin/diseases",
            get(admin_diseases_handler::<S>).post(create_disease_handler::<S>),
        )
        .route("/admin/diseases/:disease_id", put(update_disease_handler::<S>))
        .with_state(state)
}

pub(crate) async fn predict_handler<S>(
    State(state): State<TriageState<S>>,
    headers: HeaderMap,
    Json(request): Json<PredictionRequest>,
) -> Response
where
    S: PredictionStore + IdentityResolver + 'static,
{
    let Some(caller) = caller(&headers) else {
        return error_response(StatusCode::UNAUTHORIZED, "missing caller identity");
    };
    if request.symptoms.iter().all(|symptom| symptom.trim().is_empty()) {
        return error_response(StatusCode::UNPROCESSABLE_ENTITY, EMPTY_SYMPTOMS_MESSAGE);
    }

    match state.predictions.submit(caller, &request.symptoms) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn history_handler<S>(
    State(state): State<TriageState<S>>,
    headers: HeaderMap,
) -> Response
where
    S: PredictionStore + IdentityResolver + 'static,
{
    let Some(caller) = caller(&headers) else {
        return error_response(StatusCode::UNAUTHORIZED, "missing caller identity");
    };
    match state.predictions.history_for(caller) {
        Ok(history) => (StatusCode::OK, Json(history)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn profile_handler<S>(
    State(state): State<TriageState<S>>,
    headers: HeaderMap,
) -> Response
where
    S: PredictionStore + IdentityResolver + 'static,
{
    let Some(caller) = caller(&headers) else {
        return error_response(StatusCode::UNAUTHORIZED, "missing caller identity");
    };
    match state.predictions.profile_for(caller) {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn update_profile_handler<S>(
    State(state): State<TriageState<S>>,
    headers: HeaderMap,
    Json(update): Json<ProfileUpdate>,
) -> Response
where
    S: PredictionStore + IdentityResolver + 'static,
{
    let Some(caller) = caller(&headers) else {
        return error_response(StatusCode::UNAUTHORIZED, "missing caller identity");
    };
    match state.predictions.update_profile(caller, &update.name) {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn symptoms_handler<S>(State(state): State<TriageState<S>>) -> Response
where
    S: PredictionStore + IdentityResolver + 'static,
{
    match state.store().list_symptoms() {
        Ok(symptoms) => (StatusCode::OK, Json(symptoms)).into_response(),
        Err(error) => store_error_response(error),
    }
}

pub(crate) async fn diseases_handler<S>(State(state): State<TriageState<S>>) -> Response
where
    S: PredictionStore + IdentityResolver + 'static,
{
    match state.store().list_diseases() {
        Ok(diseases) => (StatusCode::OK, Json(diseases)).into_response(),
        Err(error) => store_error_response(error),
    }
}

pub(crate) async fn disease_handler<S>(
    State(state): State<TriageState<S>>,
    Path(disease_id): Path<u64>,
) -> Response
where
    S: PredictionStore + IdentityResolver + 'static,
{
    match state.store().find_disease(DiseaseId(disease_id)) {
        Ok(Some(disease)) => (StatusCode::OK, Json(disease)).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "disease not found"),
        Err(error) => store_error_response(error),
    }
}

pub(crate) async fn search_diseases_handler<S>(
    State(state): State<TriageState<S>>,
    Query(params): Query<SearchParams>,
) -> Response
where
    S: PredictionStore + IdentityResolver + 'static,
{
    let needle = params.query.trim().to_lowercase();
    match state.store().list_diseases() {
        Ok(diseases) => {
            let matches: Vec<_> = diseases
                .into_iter()
                .filter(|disease| disease.name.to_lowercase().contains(&needle))
                .collect();
            (StatusCode::OK, Json(matches)).into_response()
        }
        Err(error) => store_error_response(error),
    }
}

pub(crate) async fn statistics_handler<S>(
    State(state): State<TriageState<S>>,
    headers: HeaderMap,
) -> Response
where
    S: PredictionStore + IdentityResolver + 'static,
{
    if let Err(response) = require_admin(&state, &headers) {
        return response;
    }
    match state.statistics.statistics() {
        Ok(statistics) => (StatusCode::OK, Json(statistics)).into_response(),
        Err(error) => store_error_response(error),
    }
}

pub(crate) async fn users_handler<S>(
    State(state): State<TriageState<S>>,
    headers: HeaderMap,
) -> Response
where
    S: PredictionStore + IdentityResolver + 'static,
{
    if let Err(response) = require_admin(&state, &headers) {
        return response;
    }
    match state.store().list_users() {
        Ok(users) => (StatusCode::OK, Json(users)).into_response(),
        Err(error) => store_error_response(error),
    }
}

pub(crate) async fn admin_diseases_handler<S>(
    State(state): State<TriageState<S>>,
    headers: HeaderMap,
) -> Response
where
    S: PredictionStore + IdentityResolver + 'static,
{
    if let Err(response) = require_admin(&state, &headers) {
        return response;
    }
    match state.store().list_diseases() {
        Ok(diseases) => (StatusCode::OK, Json(diseases)).into_response(),
        Err(error) => store_error_response(error),
    }
}

pub(crate) async fn create_disease_handler<S>(
    State(state): State<TriageState<S>>,
    headers: HeaderMap,
    Json(disease): Json<NewDisease>,
) -> Response
where
    S: PredictionStore + IdentityResolver + 'static,
{
    save_disease(&state, &headers, None, disease)
}

pub(crate) async fn update_disease_handler<S>(
    State(state): State<TriageState<S>>,
    headers: HeaderMap,
    Path(disease_id): Path<u64>,
    Json(disease): Json<NewDisease>,
) -> Response
where
    S: PredictionStore + IdentityResolver + 'static,
{
    save_disease(&state, &headers, Some(DiseaseId(disease_id)), disease)
}

fn save_disease<S>(
    state: &TriageState<S>,
    headers: &HeaderMap,
    id: Option<DiseaseId>,
    disease: NewDisease,
) -> Response
where
    S: PredictionStore + IdentityResolver + 'static,
{
    if let Err(response) = require_admin(state, headers) {
        return response;
    }
    if disease.name.trim().is_empty() {
        return error_response(StatusCode::UNPROCESSABLE_ENTITY, "disease name is required");
    }
    match state.store().save_disease(id, disease) {
        Ok(saved) => (StatusCode::OK, Json(saved)).into_response(),
        Err(error) => store_error_response(error),
    }
}

fn caller(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(CALLER_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn require_admin<S>(state: &TriageState<S>, headers: &HeaderMap) -> Result<UserAccount, Response>
where
    S: PredictionStore + IdentityResolver + 'static,
{
    let caller = caller(headers)
        .ok_or_else(|| error_response(StatusCode::UNAUTHORIZED, "missing caller identity"))?;
    let account = state
        .predictions
        .authenticate(caller)
        .map_err(service_error_response)?;
    if account.is_admin() {
        Ok(account)
    } else {
        Err(error_response(StatusCode::FORBIDDEN, "administrator role required"))
    }
}

fn service_error_response(error: PredictionServiceError) -> Response {
    match error {
        PredictionServiceError::UserNotFound(_) => {
            error_response(StatusCode::UNAUTHORIZED, &error.to_string())
        }
        PredictionServiceError::BlankName => {
            error_response(StatusCode::UNPROCESSABLE_ENTITY, &error.to_string())
        }
        PredictionServiceError::Store(error) => store_error_response(error),
    }
}

fn store_error_response(error: StoreError) -> Response {
    let status = match error {
        StoreError::NotFound => StatusCode::NOT_FOUND,
        StoreError::Conflict => StatusCode::CONFLICT,
        StoreError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_response(status, &error.to_string())
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

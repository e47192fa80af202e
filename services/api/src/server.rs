use crate::cli::ServeArgs;
use crate::infra::{scoring_engine, seeded_store, AppState};
use crate::routes::with_triage_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use triage::config::AppConfig;
use triage::error::AppError;
use triage::prediction::PredictionService;
use triage::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engine = scoring_engine()?;
    let store = Arc::new(seeded_store(&config.seed));
    let prediction_service = Arc::new(PredictionService::new(store, engine.clone()));

    let app = with_triage_routes(prediction_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        rules = engine.catalog().len(),
        "symptom triage service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

//! HTTP front-end over [`CensusClient`].
//!
//! Requests are served concurrently, but each request still looks up its own
//! states one after another.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use axum::{
    Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::aggregate::weighted_average;
use crate::client::{CensusClient, FailureSummary};
use crate::normalize::{StateToken, normalize_states};
use crate::report::{OutputFormat, render};
use crate::types::StateRecord;

/// Application state shared across all requests
#[derive(Clone)]
struct AppState {
    client: Arc<CensusClient>,
    metrics: Arc<Metrics>,
}

/// Server metrics
struct Metrics {
    total_requests: AtomicU64,
    requests_in_flight: AtomicU64,
    start_time: Instant,
}

impl Metrics {
    fn enter(&self) -> RequestGuard<'_> {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
        self.requests_in_flight.fetch_add(1, Ordering::Relaxed);
        RequestGuard(&self.requests_in_flight)
    }
}

/// RAII guard for tracking in-flight requests
struct RequestGuard<'a>(&'a AtomicU64);

impl Drop for RequestGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::Relaxed);
    }
}

/// Build the Axum application with routes and middleware
pub fn build_app(client: Arc<CensusClient>) -> Router {
    let metrics = Arc::new(Metrics {
        total_requests: AtomicU64::new(0),
        requests_in_flight: AtomicU64::new(0),
        start_time: Instant::now(),
    });

    let state = AppState { client, metrics };

    Router::new()
        .route("/health", get(health_check))
        .route("/api/states", get(states_json))
        .route("/api/report", get(report_text))
        .route("/api/metrics", get(get_metrics))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[derive(Deserialize)]
struct StatesQuery {
    #[serde(default)]
    states: Option<String>,
    #[serde(default)]
    format: Option<String>,
}

impl StatesQuery {
    fn tokens(&self) -> Result<Vec<StateToken>, ApiError> {
        let tokens = normalize_states(&[self.states.as_deref().unwrap_or_default()]);
        if tokens.is_empty() {
            return Err(ApiError::BadRequest(
                "states must list at least one state".to_string(),
            ));
        }
        Ok(tokens)
    }
}

#[derive(Serialize)]
struct StatesResponse {
    success: bool,
    records: Vec<StateRecord>,
    failures: Vec<FailureSummary>,
    weighted_average: Option<f64>,
}

/// Look up a comma-separated list of states and return everything as JSON
async fn states_json(
    State(state): State<AppState>,
    Query(query): Query<StatesQuery>,
) -> Result<Json<StatesResponse>, ApiError> {
    let _guard = state.metrics.enter();
    let tokens = query.tokens()?;

    tracing::info!("Looking up {} state(s)", tokens.len());
    let collection = state.client.collect(&tokens).await;

    Ok(Json(StatesResponse {
        success: collection.failures.is_empty(),
        weighted_average: weighted_average(&collection.records),
        failures: collection.failure_summaries(),
        records: collection.records,
    }))
}

/// Same text the CLI prints for `--format`
async fn report_text(
    State(state): State<AppState>,
    Query(query): Query<StatesQuery>,
) -> Result<Response, ApiError> {
    let _guard = state.metrics.enter();
    let format = OutputFormat::select(query.format.as_deref())
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let tokens = query.tokens()?;

    tracing::info!("Building {} report for {} state(s)", format, tokens.len());
    let collection = state.client.collect(&tokens).await;

    let body = render(format, &collection.records);
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response())
}

async fn get_metrics(State(state): State<AppState>) -> Json<MetricsResponse> {
    Json(MetricsResponse {
        total_requests: state.metrics.total_requests.load(Ordering::Relaxed),
        requests_in_flight: state.metrics.requests_in_flight.load(Ordering::Relaxed),
        uptime_seconds: state.metrics.start_time.elapsed().as_secs(),
    })
}

#[derive(Serialize)]
struct MetricsResponse {
    total_requests: u64,
    requests_in_flight: u64,
    uptime_seconds: u64,
}

enum ApiError {
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(serde_json::json!({
            "success": false,
            "error": message
        }));

        (status, body).into_response()
    }
}

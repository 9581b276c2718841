//! Request handlers.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use serde_json::{Value, json};

use bsim_runner::run_scenario;

use crate::api::{SimulateRequest, SimulateResponse};
use crate::error::ApiError;
use crate::store::AppState;

/// `POST /simulate` — validate, run the orchestrator on the blocking pool,
/// store the response under a fresh `run_id`, and return it.
pub async fn simulate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SimulateRequest>,
) -> Result<Json<SimulateResponse>, ApiError> {
    let scenario = request.into_scenario()?;
    tracing::info!(
        method = %scenario.boarding.method,
        baseline = %scenario.boarding.baseline_method,
        pax = scenario.pax_count(),
        runs = scenario.controls.num_runs,
        "starting simulation"
    );

    // The orchestrator is CPU-bound (rayon fan-out inside); keep it off
    // the async worker threads.
    let budget = state.budget.clone();
    let outcome = tokio::task::spawn_blocking(move || run_scenario(&scenario, &budget))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    let response = SimulateResponse::from(outcome);
    state.runs.insert(response.clone()).await;
    tracing::info!(
        run_id = %response.run_id,
        total_sec = response.total_boarding_time_sec,
        conflicts = response.num_aisle_conflicts,
        "simulation complete"
    );
    Ok(Json(response))
}

/// `GET /simulate/{run_id}` — retrieval of a previously computed response.
/// Unknown, malformed, and evicted identifiers all answer 404.
pub async fn get_run(
    State(state): State<Arc<AppState>>,
    Path(run_id): Path<String>,
) -> Result<Json<SimulateResponse>, ApiError> {
    state
        .runs
        .get(&run_id)
        .await
        .map(Json)
        .ok_or(ApiError::RunNotFound(run_id))
}

/// `GET /health` — liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

//! HTTP handlers for the result aggregation API

use axum::{extract::State, response::Json};
use tracing::info;

use crate::error::ResultError;
use crate::service;
use crate::state::AppState;
use crate::types::{CandidateResult, Statistics};

pub async fn health_check() -> &'static str {
    "ok"
}

/// Handle POST /api/results/calculate
pub async fn calculate_results(
    State(state): State<AppState>,
) -> Result<&'static str, ResultError> {
    info!("POST /api/results/calculate - Recomputing tallies");
    service::calculate_results(&state).await?;
    Ok("Results calculated successfully")
}

/// Handle GET /api/results
pub async fn get_results(
    State(state): State<AppState>,
) -> Result<Json<Vec<CandidateResult>>, ResultError> {
    let results = service::get_results(&state).await?;
    Ok(Json(results))
}

/// Handle GET /api/results/statistics
pub async fn get_statistics(State(state): State<AppState>) -> Result<Json<Statistics>, ResultError> {
    let statistics = service::get_statistics(&state).await?;
    Ok(Json(statistics))
}

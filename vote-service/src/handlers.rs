//! HTTP handlers for the vote admission API

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::Json,
};
use serde_json::Value;
use tracing::info;

use crate::admission;
use crate::database::models::VoteRecord;
use crate::error::VoteError;
use crate::ledger;
use crate::metrics::{self, AdmissionOutcome};
use crate::state::AppState;
use crate::types::{VoteRequest, VoteResponse};

pub async fn health_check() -> &'static str {
    "ok"
}

/// Handle POST /api/votes
pub async fn submit_vote(
    State(state): State<AppState>,
    Json(request): Json<VoteRequest>,
) -> Result<Json<VoteResponse>, VoteError> {
    info!(
        "POST /api/votes - elector {} voting for candidate {}",
        request.elector_id, request.candidate_id
    );

    match admission::submit_vote(&state, request).await {
        Ok(response) => {
            metrics::record_admission(AdmissionOutcome::Accepted);
            Ok(Json(response))
        }
        Err(err) => {
            info!("Vote rejected: {}", err);
            metrics::record_admission(err.outcome());
            Err(err)
        }
    }
}

/// Handle GET /api/votes
pub async fn list_votes(State(state): State<AppState>) -> Result<Json<Vec<VoteRecord>>, VoteError> {
    let votes = ledger::list_all(&state.pool).await?;
    Ok(Json(votes))
}

/// Handle GET /api/votes/candidate/{candidate_id}
pub async fn list_votes_by_candidate(
    State(state): State<AppState>,
    Path(candidate_id): Path<i64>,
) -> Result<Json<Vec<VoteRecord>>, VoteError> {
    let votes = ledger::list_by_candidate(&state.pool, candidate_id).await?;
    Ok(Json(votes))
}

/// Handle GET /admin/stats, gated by the metrics token header.
pub async fn admin_stats(headers: HeaderMap) -> Result<Json<Value>, StatusCode> {
    let expected = std::env::var("METRICS_AUTH_TOKEN").map_err(|_| StatusCode::NOT_FOUND)?;

    let provided = headers
        .get("x-metrics-token")
        .and_then(|v| v.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;
    if provided != expected {
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(Json(metrics::snapshot_as_json()))
}

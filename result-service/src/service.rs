//! Result aggregation operations
//!
//! Tallies are recomputed wholesale from the vote ledger feed on every
//! calculation, never incrementally patched, so the projection always
//! reflects a real ledger snapshot.

use tracing::info;

use crate::error::ResultError;
use crate::state::AppState;
use crate::store;
use crate::tally;
use crate::types::{CandidateResult, Statistics};

/// Recompute all per-candidate totals from the full vote set and persist
/// them to the result store. A failed ledger read aborts before any write.
pub async fn calculate_results(state: &AppState) -> Result<(), ResultError> {
    let votes = state.feed.list_votes().await.map_err(ResultError::Feed)?;
    let tallies = tally::compute_tallies(&votes);

    info!(
        "Recomputed tallies: {} votes across {} candidates",
        votes.len(),
        tallies.len()
    );

    for (candidate_id, total_votes) in &tallies {
        store::save(&state.pool, *candidate_id, *total_votes).await?;
    }

    Ok(())
}

/// Current stored totals with percentages computed at read time.
pub async fn get_results(state: &AppState) -> Result<Vec<CandidateResult>, ResultError> {
    let records = store::list_all(&state.pool).await?;
    let overall_votes: i64 = records.iter().map(|r| r.total_votes).sum();

    Ok(records
        .into_iter()
        .map(|r| CandidateResult {
            candidate_id: r.candidate_id,
            total_votes: r.total_votes,
            percentage: tally::percentage(r.total_votes, overall_votes),
        })
        .collect())
}

pub async fn get_statistics(state: &AppState) -> Result<Statistics, ResultError> {
    let results = get_results(state).await?;
    let total_votes = results.iter().map(|r| r.total_votes).sum();

    Ok(Statistics {
        total_votes,
        total_candidates: results.len() as i64,
        results,
    })
}

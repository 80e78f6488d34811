//! Types for HTTP responses

use serde::{Deserialize, Serialize};

/// Per-candidate tally with its share of the overall vote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateResult {
    pub candidate_id: i64,
    pub total_votes: i64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statistics {
    pub total_votes: i64,
    pub total_candidates: i64,
    pub results: Vec<CandidateResult>,
}

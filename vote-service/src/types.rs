//! Types for HTTP requests and responses

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct VoteRequest {
    pub elector_id: i64,
    pub candidate_id: i64,
}

/// Committed vote joined with the elector's display name for caller
/// convenience; the join has no bearing on ledger invariants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteResponse {
    pub id_vote: i64,
    pub cast_at: String,
    pub elector_id: i64,
    pub elector_name: String,
    pub candidate_id: i64,
    pub message: String,
}

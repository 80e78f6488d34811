use serde::{Deserialize, Serialize};

/// Committed vote row in the ledger. Immutable once written; the id and
/// timestamp are assigned by the ledger at commit time, never by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct VoteRecord {
    pub id_vote: i64,
    pub elector_id: i64,
    pub candidate_id: i64,
    pub cast_at: String, // RFC3339 UTC commit timestamp
}

use serde::{Deserialize, Serialize};

/// Stored per-candidate total, keyed by candidate. Not authoritative: a
/// projection of the vote ledger maintained only by the tally engine.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ResultRecord {
    pub candidate_id: i64,
    pub total_votes: i64,
}

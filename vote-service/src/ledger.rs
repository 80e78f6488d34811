//! Vote ledger operations
//!
//! The ledger is the single shared mutable resource and the authority for
//! the one-vote-per-elector invariant: `append` relies on the unique index
//! on `elector_id` and reports a second vote for the same elector as a
//! distinguishable [`LedgerError::DuplicateElector`], never silently
//! ignoring or overwriting it.

use chrono::Utc;
use sqlx::sqlite::SqlitePool;
use thiserror::Error;
use tracing::debug;

use crate::database::models::VoteRecord;

#[derive(Debug, Error)]
pub enum LedgerError {
    /// The unique index rejected a second vote for this elector.
    #[error("elector {0} already has a committed vote")]
    DuplicateElector(i64),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Atomically append a vote, assigning its id and commit timestamp.
pub async fn append(
    pool: &SqlitePool,
    elector_id: i64,
    candidate_id: i64,
) -> Result<VoteRecord, LedgerError> {
    let cast_at = Utc::now().to_rfc3339();

    let id_vote: i64 = sqlx::query_scalar(
        "INSERT INTO votes (elector_id, candidate_id, cast_at) VALUES (?, ?, ?) \
         RETURNING id_vote",
    )
    .bind(elector_id)
    .bind(candidate_id)
    .bind(&cast_at)
    .fetch_one(pool)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            LedgerError::DuplicateElector(elector_id)
        }
        _ => LedgerError::Database(e),
    })?;

    debug!(
        "Committed vote {} for elector {} (candidate {})",
        id_vote, elector_id, candidate_id
    );

    Ok(VoteRecord {
        id_vote,
        elector_id,
        candidate_id,
        cast_at,
    })
}

/// Fast-fail existence check; the unique index in `append` is the real
/// correctness boundary under concurrent submissions.
pub async fn exists_for_elector(pool: &SqlitePool, elector_id: i64) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM votes WHERE elector_id = ?")
        .bind(elector_id)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<VoteRecord>, sqlx::Error> {
    sqlx::query_as::<_, VoteRecord>(
        "SELECT id_vote, elector_id, candidate_id, cast_at FROM votes ORDER BY id_vote",
    )
    .fetch_all(pool)
    .await
}

pub async fn list_by_candidate(
    pool: &SqlitePool,
    candidate_id: i64,
) -> Result<Vec<VoteRecord>, sqlx::Error> {
    sqlx::query_as::<_, VoteRecord>(
        "SELECT id_vote, elector_id, candidate_id, cast_at FROM votes \
         WHERE candidate_id = ? ORDER BY id_vote",
    )
    .bind(candidate_id)
    .fetch_all(pool)
    .await
}

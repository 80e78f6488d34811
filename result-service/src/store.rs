//! Result store operations
//!
//! Upsert-only projection keyed by candidate; values are written exclusively
//! by the tally engine and treated as last-writer-wins derived state.

use sqlx::sqlite::SqlitePool;
use tracing::debug;

use crate::database::models::ResultRecord;

/// Upsert the stored total for a candidate.
pub async fn save(
    pool: &SqlitePool,
    candidate_id: i64,
    total_votes: i64,
) -> Result<(), sqlx::Error> {
    debug!(
        "Saving result: candidate {} -> {} votes",
        candidate_id, total_votes
    );

    sqlx::query(
        "INSERT INTO results (candidate_id, total_votes) VALUES (?, ?) \
         ON CONFLICT(candidate_id) DO UPDATE SET total_votes = excluded.total_votes",
    )
    .bind(candidate_id)
    .bind(total_votes)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<ResultRecord>, sqlx::Error> {
    sqlx::query_as::<_, ResultRecord>(
        "SELECT candidate_id, total_votes FROM results ORDER BY candidate_id",
    )
    .fetch_all(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_pool;

    #[tokio::test]
    async fn save_inserts_then_updates() {
        let pool = test_pool().await;

        save(&pool, 1, 3).await.unwrap();
        save(&pool, 2, 1).await.unwrap();
        save(&pool, 1, 5).await.unwrap();

        let records = list_all(&pool).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].candidate_id, 1);
        assert_eq!(records[0].total_votes, 5);
        assert_eq!(records[1].candidate_id, 2);
        assert_eq!(records[1].total_votes, 1);
    }
}

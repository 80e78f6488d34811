//! Vote admission state machine
//!
//! Ordered steps, each a suspension point against an external collaborator
//! or the ledger:
//! 1. directory lookup (absent vs unreachable are distinct failures),
//! 2. fast-fail duplicate pre-check,
//! 3. atomic append guarded by the ledger's unique index,
//! 4. read-only display-name join for the response.
//!
//! Every failure path leaves the ledger untouched.

use tracing::info;

use crate::error::VoteError;
use crate::ledger::{self, LedgerError};
use crate::state::AppState;
use crate::types::{VoteRequest, VoteResponse};

pub async fn submit_vote(state: &AppState, request: VoteRequest) -> Result<VoteResponse, VoteError> {
    let VoteRequest {
        elector_id,
        candidate_id,
    } = request;

    let profile = match state.directory.get_elector(elector_id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => return Err(VoteError::ElectorNotFound(elector_id)),
        Err(e) => return Err(VoteError::DirectoryUnavailable(e)),
    };

    if ledger::exists_for_elector(&state.pool, elector_id).await? {
        return Err(VoteError::AlreadyVoted(elector_id));
    }

    // Two concurrent submissions can both pass the pre-check; the unique
    // index decides the winner here.
    let record = match ledger::append(&state.pool, elector_id, candidate_id).await {
        Ok(record) => record,
        Err(LedgerError::DuplicateElector(_)) => return Err(VoteError::AlreadyVoted(elector_id)),
        Err(LedgerError::Database(e)) => return Err(VoteError::Ledger(e)),
    };

    info!(
        "Vote {} committed: elector {} -> candidate {}",
        record.id_vote, record.elector_id, record.candidate_id
    );

    Ok(VoteResponse {
        id_vote: record.id_vote,
        cast_at: record.cast_at,
        elector_id: record.elector_id,
        elector_name: profile.display_name(),
        candidate_id: record.candidate_id,
        message: "Vote submitted successfully".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::database::test_pool;
    use crate::directory::{DirectoryError, ElectorDirectory, ElectorProfile};

    struct FakeDirectory {
        electors: HashMap<i64, ElectorProfile>,
        available: bool,
    }

    impl FakeDirectory {
        fn with_electors(ids: &[i64]) -> Self {
            let electors = ids
                .iter()
                .map(|&id| {
                    (
                        id,
                        ElectorProfile {
                            id,
                            last_name: format!("Elector{}", id),
                            first_name: "Test".to_string(),
                        },
                    )
                })
                .collect();
            Self {
                electors,
                available: true,
            }
        }

        fn unavailable() -> Self {
            Self {
                electors: HashMap::new(),
                available: false,
            }
        }
    }

    #[async_trait]
    impl ElectorDirectory for FakeDirectory {
        async fn get_elector(
            &self,
            elector_id: i64,
        ) -> Result<Option<ElectorProfile>, DirectoryError> {
            if !self.available {
                return Err(DirectoryError::Status(
                    reqwest::StatusCode::SERVICE_UNAVAILABLE,
                ));
            }
            Ok(self.electors.get(&elector_id).cloned())
        }
    }

    async fn test_state(directory: FakeDirectory) -> AppState {
        AppState {
            pool: test_pool().await,
            directory: Arc::new(directory),
        }
    }

    fn request(elector_id: i64, candidate_id: i64) -> VoteRequest {
        VoteRequest {
            elector_id,
            candidate_id,
        }
    }

    #[tokio::test]
    async fn accepts_vote_and_joins_display_name() {
        let state = test_state(FakeDirectory::with_electors(&[1])).await;

        let response = submit_vote(&state, request(1, 4)).await.unwrap();

        assert_eq!(response.elector_id, 1);
        assert_eq!(response.candidate_id, 4);
        assert_eq!(response.elector_name, "Elector1 Test");
        assert!(!response.cast_at.is_empty());

        let votes = ledger::list_all(&state.pool).await.unwrap();
        assert_eq!(votes.len(), 1);
        assert_eq!(votes[0].id_vote, response.id_vote);
    }

    #[tokio::test]
    async fn rejects_unknown_elector_without_writing() {
        let state = test_state(FakeDirectory::with_electors(&[1])).await;

        let err = submit_vote(&state, request(99, 1)).await.unwrap_err();

        assert!(matches!(err, VoteError::ElectorNotFound(99)));
        assert!(ledger::list_all(&state.pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejects_second_vote_and_keeps_first() {
        let state = test_state(FakeDirectory::with_electors(&[5])).await;

        submit_vote(&state, request(5, 2)).await.unwrap();
        let err = submit_vote(&state, request(5, 3)).await.unwrap_err();

        assert!(matches!(err, VoteError::AlreadyVoted(5)));

        let votes = ledger::list_all(&state.pool).await.unwrap();
        assert_eq!(votes.len(), 1);
        assert_eq!(votes[0].elector_id, 5);
        assert_eq!(votes[0].candidate_id, 2);
    }

    #[tokio::test]
    async fn rejection_is_idempotent() {
        let state = test_state(FakeDirectory::with_electors(&[8])).await;

        submit_vote(&state, request(8, 1)).await.unwrap();
        for _ in 0..3 {
            let err = submit_vote(&state, request(8, 1)).await.unwrap_err();
            assert!(matches!(err, VoteError::AlreadyVoted(8)));
        }

        assert_eq!(ledger::list_all(&state.pool).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn directory_outage_commits_nothing() {
        let state = test_state(FakeDirectory::unavailable()).await;

        let err = submit_vote(&state, request(1, 1)).await.unwrap_err();

        assert!(matches!(err, VoteError::DirectoryUnavailable(_)));
        assert!(ledger::list_all(&state.pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn concurrent_submissions_elect_a_single_winner() {
        let state = test_state(FakeDirectory::with_electors(&[42])).await;

        let (first, second) = tokio::join!(
            submit_vote(&state, request(42, 1)),
            submit_vote(&state, request(42, 2)),
        );

        let successes = [&first, &second].iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1, "exactly one submission must win");

        for result in [first, second] {
            if let Err(err) = result {
                assert!(matches!(err, VoteError::AlreadyVoted(42)));
            }
        }

        let votes = ledger::list_all(&state.pool).await.unwrap();
        assert_eq!(votes.len(), 1);
        assert_eq!(votes[0].elector_id, 42);
    }
}

//! Vote ledger feed client
//!
//! The tally engine reads the committed vote set from the vote service. A
//! failed read is surfaced as a retryable error, never as an empty vote
//! set: a zero tally must only ever mean zero votes.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Committed vote as exposed by the vote service.
#[derive(Debug, Clone, Deserialize)]
pub struct VoteDto {
    pub id_vote: i64,
    pub elector_id: i64,
    pub candidate_id: i64,
    pub cast_at: String,
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("vote ledger feed request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("vote ledger feed returned unexpected status {0}")]
    Status(StatusCode),
}

/// Read-only seam over the vote ledger, pluggable so tests can tally a
/// canned vote set without a live vote service.
#[async_trait]
pub trait VoteFeed: Send + Sync {
    async fn list_votes(&self) -> Result<Vec<VoteDto>, FeedError>;
}

/// HTTP client for the vote-service ledger listing.
pub struct HttpVoteFeed {
    client: reqwest::Client,
    base_url: String,
}

impl HttpVoteFeed {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl VoteFeed for HttpVoteFeed {
    async fn list_votes(&self) -> Result<Vec<VoteDto>, FeedError> {
        let url = format!("{}/api/votes", self.base_url);
        debug!("Fetching committed votes from {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(FeedError::Status(response.status()));
        }

        let votes = response.json::<Vec<VoteDto>>().await?;
        Ok(votes)
    }
}

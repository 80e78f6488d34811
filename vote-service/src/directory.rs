//! Elector directory client
//!
//! The directory is an external, read-only collaborator. A lookup has three
//! distinct outcomes: the elector exists, the elector is absent, or the
//! directory itself could not be reached. Absent and unreachable are never
//! conflated; callers may retry the latter but not the former.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Shallow projection of an elector as exposed by the directory.
#[derive(Debug, Clone, Deserialize)]
pub struct ElectorProfile {
    pub id: i64,
    pub last_name: String,
    pub first_name: String,
}

impl ElectorProfile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }
}

/// The directory call itself failed; the elector's existence is unknown.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("elector directory request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("elector directory returned unexpected status {0}")]
    Status(StatusCode),
}

/// Lookup-by-id seam for the elector directory, pluggable so tests can swap
/// in a fake without touching admission logic.
#[async_trait]
pub trait ElectorDirectory: Send + Sync {
    /// `Ok(Some(_))` elector exists, `Ok(None)` elector absent,
    /// `Err(_)` directory unreachable.
    async fn get_elector(&self, elector_id: i64) -> Result<Option<ElectorProfile>, DirectoryError>;
}

/// HTTP client for the voter-service elector directory.
pub struct HttpElectorDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl HttpElectorDirectory {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl ElectorDirectory for HttpElectorDirectory {
    async fn get_elector(&self, elector_id: i64) -> Result<Option<ElectorProfile>, DirectoryError> {
        let url = format!("{}/api/electors/{}", self.base_url, elector_id);
        debug!("Directory lookup for elector {}", elector_id);

        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(DirectoryError::Status(response.status()));
        }

        let profile = response.json::<ElectorProfile>().await?;
        Ok(Some(profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_joins_last_and_first() {
        let profile = ElectorProfile {
            id: 7,
            last_name: "Curie".to_string(),
            first_name: "Marie".to_string(),
        };
        assert_eq!(profile.display_name(), "Curie Marie");
    }
}

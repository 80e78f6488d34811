//! Vote admission error taxonomy and HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::directory::DirectoryError;
use crate::metrics::AdmissionOutcome;

/// Outcomes a submission can fail with. Each maps to a distinct outward
/// signal so callers can tell retryable failures from terminal ones.
#[derive(Debug, Error)]
pub enum VoteError {
    /// Terminal: the referenced elector does not exist.
    #[error("elector {0} does not exist")]
    ElectorNotFound(i64),
    /// Terminal: the elector already has a committed vote.
    #[error("elector {0} has already voted")]
    AlreadyVoted(i64),
    /// Transient: the directory could not be reached; callers may retry.
    #[error("elector directory is unavailable: {0}")]
    DirectoryUnavailable(#[source] DirectoryError),
    #[error("vote ledger error: {0}")]
    Ledger(#[from] sqlx::Error),
}

impl VoteError {
    /// Stable machine-readable code carried in the error body.
    pub fn code(&self) -> &'static str {
        match self {
            VoteError::ElectorNotFound(_) => "elector_not_found",
            VoteError::AlreadyVoted(_) => "already_voted",
            VoteError::DirectoryUnavailable(_) => "directory_unavailable",
            VoteError::Ledger(_) => "internal",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            VoteError::ElectorNotFound(_) => StatusCode::NOT_FOUND,
            VoteError::AlreadyVoted(_) => StatusCode::CONFLICT,
            VoteError::DirectoryUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            VoteError::Ledger(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn outcome(&self) -> AdmissionOutcome {
        match self {
            VoteError::ElectorNotFound(_) => AdmissionOutcome::ElectorNotFound,
            VoteError::AlreadyVoted(_) => AdmissionOutcome::AlreadyVoted,
            VoteError::DirectoryUnavailable(_) => AdmissionOutcome::DirectoryUnavailable,
            VoteError::Ledger(_) => AdmissionOutcome::Internal,
        }
    }
}

impl IntoResponse for VoteError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.code(),
            "message": self.to_string(),
        }));
        (self.status(), body).into_response()
    }
}

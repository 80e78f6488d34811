//! Result service error taxonomy and HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::feed::FeedError;

#[derive(Debug, Error)]
pub enum ResultError {
    /// Transient: the vote ledger could not be read; callers may retry.
    #[error("vote ledger is unavailable: {0}")]
    Feed(#[source] FeedError),
    #[error("result store error: {0}")]
    Store(#[from] sqlx::Error),
}

impl ResultError {
    pub fn code(&self) -> &'static str {
        match self {
            ResultError::Feed(_) => "ledger_unavailable",
            ResultError::Store(_) => "internal",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ResultError::Feed(_) => StatusCode::SERVICE_UNAVAILABLE,
            ResultError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ResultError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.code(),
            "message": self.to_string(),
        }));
        (self.status(), body).into_response()
    }
}

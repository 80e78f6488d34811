//! Shared application state

use std::sync::Arc;

use sqlx::sqlite::SqlitePool;

use crate::feed::VoteFeed;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub feed: Arc<dyn VoteFeed>,
}
